// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::convert::TryFrom;
use std::error::Error;
use std::io::{self, BufRead};
use std::process;

use clap::{App, Arg};
use log::{debug, warn};
use prettytable::{cell, format, row, Table};
use separator::Separatable;

use sokoban_board::config::{Config, InputMode, DEFAULT_LEVEL, DEFAULT_TILE_SIZE};
use sokoban_board::registry::LevelRegistry;
use sokoban_board::{LoadLevels, Pos, Session};

fn main() {
    env_logger::init();

    let default_tile_size = DEFAULT_TILE_SIZE.to_string();
    let matches = App::new("sokoban-board")
        .author("martin-t")
        .version("0.1")
        .about(
            "Plays sokoban by clicks read from stdin, one per line: \
             `x y` clicks a pixel (or a cell with --cells), \
             `level <id>` switches levels, `q` quits",
        ).arg(
            Arg::with_name("cells")
                .short("c")
                .long("cells")
                .help("read clicks as cell coordinates instead of pixels"),
        ).arg(
            Arg::with_name("tile-size")
                .short("t")
                .long("tile-size")
                .takes_value(true)
                .default_value(&default_tile_size)
                .help("edge of a tile in pixels"),
        ).arg(
            Arg::with_name("level")
                .short("l")
                .long("level")
                .takes_value(true)
                .default_value(DEFAULT_LEVEL)
                .help("level to start with"),
        ).arg(
            Arg::with_name("levels")
                .long("levels")
                .takes_value(true)
                .help("level pack to use instead of the builtin levels"),
        ).arg(
            Arg::with_name("list")
                .long("list")
                .help("list available levels and exit"),
        ).get_matches();

    let tile_size = value_or_exit(&matches, "tile-size");
    let tile_size: u32 = tile_size.parse().unwrap_or_else(|err| {
        eprintln!("Invalid tile size {}: {}", tile_size, err);
        process::exit(1);
    });
    if tile_size == 0 {
        eprintln!("Tile size must be positive");
        process::exit(1);
    }
    let config = Config {
        tile_size,
        input: if matches.is_present("cells") {
            InputMode::Cells
        } else {
            InputMode::Pixels
        },
    };
    debug!("Reading clicks as {}, tile size {}", config.input, config.tile_size);

    let registry = match matches.value_of("levels") {
        Some(path) => path.load_levels().unwrap_or_else(|err| {
            eprintln!("Can't load levels from {}: {}", path, err);
            process::exit(1);
        }),
        None => LevelRegistry::builtin(),
    };

    if matches.is_present("list") {
        print_levels(&registry);
        return;
    }

    let level = value_or_exit(&matches, "level");
    let mut session = Session::new(registry, level, config).unwrap_or_else(|err| {
        eprintln!("Can't start: {}", err);
        process::exit(1);
    });

    if let Err(err) = play(&mut session) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn value_or_exit<'a>(matches: &'a clap::ArgMatches<'_>, name: &str) -> &'a str {
    matches.value_of(name).unwrap_or_else(|| {
        eprintln!("Missing value for --{}", name);
        process::exit(1);
    })
}

fn print_levels(registry: &LevelRegistry) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row!["Level", "Size", "Boxes", "Goals"]);
    for id in registry.ids() {
        // everything in a registry parses
        if let Ok(board) = registry.new_board(id) {
            table.add_row(row![
                id,
                format!("{}x{}", board.width(), board.height()),
                board.box_count(),
                board.goal_count()
            ]);
        }
    }
    table.printstd();
}

fn play(session: &mut Session) -> Result<(), Box<dyn Error>> {
    println!("{}", session.board());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" {
            break;
        }

        if line.starts_with("level ") {
            let id = line["level ".len()..].trim();
            match session.select_level(id) {
                Ok(()) => println!("Level {}", id),
                Err(err) => println!("{}", err),
            }
        } else {
            match parse_coords(line) {
                Some((x, y)) => {
                    let mov = match session.config().input {
                        InputMode::Pixels => session.click_pixel(x, y),
                        InputMode::Cells => match (i32::try_from(x), i32::try_from(y)) {
                            (Ok(x), Ok(y)) => session.click(Pos::new(x, y)),
                            _ => {
                                warn!("Click at cell [{}, {}] is outside the board", x, y);
                                Ok(None)
                            }
                        },
                    };
                    if let Err(err) = mov {
                        // clicks outside the board are the caller's mistake, not fatal
                        warn!("{}", err);
                    }
                }
                None => {
                    println!("Can't parse click: {}", line);
                    continue;
                }
            }
        }
        println!("{}", session.board());
    }

    let moves = session.moves();
    println!("{}", moves);
    println!("Moves: {}", (moves.move_cnt() as u64).separated_string());
    println!("Pushes: {}", (moves.push_cnt() as u64).separated_string());
    Ok(())
}

fn parse_coords(line: &str) -> Option<(i64, i64)> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}
