use assert_cmd::Command;

fn binary() -> Command {
    let mut cmd = Command::cargo_bin("sokoban-board").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn run_cells_pushes() {
    let output = r"#######
#.  $@#
#######

#######
#. $@ #
#######

#######
#.$@  #
#######

#######
#*@   #
#######

LLL
Moves: 3
Pushes: 3
";

    binary()
        .arg("--levels")
        .arg("levels/demo.txt")
        .arg("--level")
        .arg("corridor")
        .arg("--cells")
        .write_stdin("4 1\n3 1\n2 1\n")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_pixels_and_restart() {
    let output = r"#######
#.  $@#
#######

#######
#. $@ #
#######

#######
#. $@ #
#######

Level corridor
#######
#.  $@#
#######


Moves: 0
Pushes: 0
";

    // second click is not next to the player
    binary()
        .arg("--levels")
        .arg("levels/demo.txt")
        .arg("--level")
        .arg("corridor")
        .write_stdin("150 40\n70 5\nlevel corridor\nq\n150 40\n")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_bad_input_lines() {
    let output = r"-######
-#+*  #
-######

Can't parse click: left
Unknown level: level_7
-######
-#+*  #
-######

Level corridor
#######
#.  $@#
#######

#######
#.  $@#
#######


Moves: 0
Pushes: 0
";

    binary()
        .arg("--levels")
        .arg("levels/demo.txt")
        .arg("--level")
        .arg("goal-room")
        .arg("--cells")
        // the last click is outside the board
        .write_stdin("left\nlevel level_7\nlevel corridor\n40 40\n")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn run_cells_beyond_i32() {
    let output = r"#######
#.  $@#
#######

#######
#.  $@#
#######


Moves: 0
Pushes: 0
";

    // 2^32 + 4 must not wrap around to the cell left of the player
    binary()
        .arg("--levels")
        .arg("levels/demo.txt")
        .arg("--level")
        .arg("corridor")
        .arg("--cells")
        .write_stdin("4294967300 1\n")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn run_builtin_level() {
    // box right of the player, tiles of 10 pixels
    let assert = binary()
        .arg("--tile-size")
        .arg("10")
        .write_stdin("85 55\n")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("#    #  @$ #\n"));
    assert!(stdout.ends_with("R\nMoves: 1\nPushes: 1\n"));
}

#[test]
fn run_list() {
    let assert = binary().arg("--list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Level"));
    assert!(lines[1].contains("level_0") && lines[1].contains("12x12"));
    assert!(lines[2].contains("level_1"));
}

#[test]
fn run_unknown_level() {
    binary()
        .arg("--level")
        .arg("level_42")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_tile_size() {
    binary().arg("--tile-size").arg("0").assert().failure().stdout("");
    binary().arg("--tile-size").arg("big").assert().failure().stdout("");
}

#[test]
fn run_missing_pack() {
    binary()
        .arg("--levels")
        .arg("levels/missing.txt")
        .assert()
        .failure()
        .stdout("");
}
