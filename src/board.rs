use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::data::{Cell, Dir, Pos};
use crate::parser::{self, MalformedLevel};
use crate::render::{Render, Tile};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErr {
    OutOfBounds(Pos),
}

impl Display for BoardErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BoardErr::OutOfBounds(pos) => write!(f, "Position {} is outside the board", pos),
        }
    }
}

impl Error for BoardErr {}

/// Mutable grid of cell symbols.
///
/// Always holds exactly one player (checked when parsing)
/// and the move engine keeps it that way.
/// The `place_*` methods do no validation of their own.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec2d<Cell>,
}

impl Board {
    /// Creates a board from a level template, one string per row.
    ///
    /// Every call produces a new grid, boards never share rows with the template or each other.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MalformedLevel> {
        let grid = parser::parse_rows(rows)?;
        Ok(Board { grid })
    }

    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    pub fn cell_at(&self, pos: Pos) -> Result<Cell, BoardErr> {
        self.grid.get(pos).cloned().ok_or(BoardErr::OutOfBounds(pos))
    }

    pub fn is_wall(&self, pos: Pos) -> Result<bool, BoardErr> {
        Ok(self.cell_at(pos)? == Cell::Wall)
    }

    /// Plain box or box on goal
    pub fn is_box(&self, pos: Pos) -> Result<bool, BoardErr> {
        Ok(self.cell_at(pos)?.is_box())
    }

    pub fn is_box_on_goal(&self, pos: Pos) -> Result<bool, BoardErr> {
        Ok(self.cell_at(pos)? == Cell::BoxOnGoal)
    }

    /// Only an unoccupied goal
    pub fn is_goal(&self, pos: Pos) -> Result<bool, BoardErr> {
        Ok(self.cell_at(pos)? == Cell::Goal)
    }

    /// Plain player or player on goal
    pub fn is_player(&self, pos: Pos) -> Result<bool, BoardErr> {
        Ok(self.cell_at(pos)?.is_player())
    }

    pub fn is_player_on_goal(&self, pos: Pos) -> Result<bool, BoardErr> {
        Ok(self.cell_at(pos)? == Cell::PlayerOnGoal)
    }

    /// Floor, goal or ground
    pub fn is_vacant(&self, pos: Pos) -> Result<bool, BoardErr> {
        Ok(self.cell_at(pos)?.is_vacant())
    }

    /// The adjacent position in `dir`.
    ///
    /// Stepping off the board returns `pos` unchanged, there's no wrapping.
    pub fn neighbor(&self, pos: Pos, dir: Dir) -> Pos {
        let next = pos + dir;
        if self.grid.contains(next) {
            next
        } else {
            pos
        }
    }

    pub fn place_box(&mut self, pos: Pos) -> Result<&mut Self, BoardErr> {
        self.place(pos, Cell::Box)
    }

    pub fn place_box_on_goal(&mut self, pos: Pos) -> Result<&mut Self, BoardErr> {
        self.place(pos, Cell::BoxOnGoal)
    }

    pub fn place_floor(&mut self, pos: Pos) -> Result<&mut Self, BoardErr> {
        self.place(pos, Cell::Floor)
    }

    pub fn place_goal(&mut self, pos: Pos) -> Result<&mut Self, BoardErr> {
        self.place(pos, Cell::Goal)
    }

    pub fn place_player(&mut self, pos: Pos) -> Result<&mut Self, BoardErr> {
        self.place(pos, Cell::Player)
    }

    pub fn place_player_on_goal(&mut self, pos: Pos) -> Result<&mut Self, BoardErr> {
        self.place(pos, Cell::PlayerOnGoal)
    }

    fn place(&mut self, pos: Pos, cell: Cell) -> Result<&mut Self, BoardErr> {
        *self.grid.get_mut(pos).ok_or(BoardErr::OutOfBounds(pos))? = cell;
        Ok(self)
    }

    pub fn player_pos(&self) -> Option<Pos> {
        self.positions().find(|&pos| self.grid[pos].is_player())
    }

    pub fn box_count(&self) -> usize {
        self.grid.iter().filter(|cell| cell.is_box()).count()
    }

    /// Goals including those covered by a box or the player
    pub fn goal_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|&&cell| {
                cell == Cell::Goal || cell == Cell::BoxOnGoal || cell == Cell::PlayerOnGoal
            }).count()
    }

    /// Current contents in the level template alphabet.
    pub fn rows(&self) -> Vec<String> {
        self.grid
            .row_iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    /// Draws every cell, row by row, with the player facing `facing`.
    pub fn render<R: Render>(&self, renderer: &mut R, facing: Dir) {
        for pos in self.positions() {
            for &tile in Tile::layers(self.grid[pos], facing) {
                renderer.draw_tile(pos, tile);
            }
        }
    }

    fn positions(&self) -> impl Iterator<Item = Pos> {
        let (width, height) = (self.width() as i32, self.height() as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos::new(x, y)))
    }
}

impl FromStr for Board {
    type Err = MalformedLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = parser::parse(s)?;
        Ok(Board { grid })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
