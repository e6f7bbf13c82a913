//! Contract between the board and whatever draws it.
//!
//! The board only says which tiles go where, turning tiles into pixels is up to the renderer.

use crate::data::{Cell, Dir, Pos};

/// One sprite of the tile set. A cell is drawn as one or more tiles stacked on each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Box,
    BoxOnGoal,
    Wall,
    Floor,
    Goal,
    Grass,
    FaceUp,
    FaceRight,
    FaceDown,
    FaceLeft,
}

impl Tile {
    /// Tiles for `cell` from the bottom up, the player is drawn over the terrain it stands on.
    pub fn layers(cell: Cell, facing: Dir) -> &'static [Tile] {
        use self::Tile::*;

        match (cell, facing) {
            (Cell::Wall, _) => &[Wall],
            (Cell::Floor, _) => &[Floor],
            (Cell::Goal, _) => &[Goal],
            (Cell::Box, _) => &[Box],
            (Cell::BoxOnGoal, _) => &[BoxOnGoal],
            (Cell::Ground, _) => &[Grass],
            (Cell::Player, Dir::Up) => &[Floor, FaceUp],
            (Cell::Player, Dir::Right) => &[Floor, FaceRight],
            (Cell::Player, Dir::Down) => &[Floor, FaceDown],
            (Cell::Player, Dir::Left) => &[Floor, FaceLeft],
            (Cell::PlayerOnGoal, Dir::Up) => &[Goal, FaceUp],
            (Cell::PlayerOnGoal, Dir::Right) => &[Goal, FaceRight],
            (Cell::PlayerOnGoal, Dir::Down) => &[Goal, FaceDown],
            (Cell::PlayerOnGoal, Dir::Left) => &[Goal, FaceLeft],
        }
    }
}

pub trait Render {
    fn draw_tile(&mut self, pos: Pos, tile: Tile);
}
