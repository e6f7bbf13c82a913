use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Position on the board, `x` is the column and `y` the row.
///
/// Signed so that coordinates outside the board can be expressed and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    pub fn inverse(self) -> Self {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }

    /// (dx, dy) with `y` growing downwards
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dx, dy) = dir.offset();
        Pos::new(self.x + dx, self.y + dy)
    }
}

/// Contents of a single board cell, one per symbol of the level alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Floor,
    Goal,
    Box,
    BoxOnGoal,
    Player,
    PlayerOnGoal,
    Ground,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        Some(match symbol {
            '#' => Cell::Wall,
            ' ' => Cell::Floor,
            '.' => Cell::Goal,
            '$' => Cell::Box,
            '*' => Cell::BoxOnGoal,
            '@' => Cell::Player,
            '+' => Cell::PlayerOnGoal,
            '-' => Cell::Ground,
            _ => return None,
        })
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => ' ',
            Cell::Goal => '.',
            Cell::Box => '$',
            Cell::BoxOnGoal => '*',
            Cell::Player => '@',
            Cell::PlayerOnGoal => '+',
            Cell::Ground => '-',
        }
    }

    pub fn is_box(self) -> bool {
        self == Cell::Box || self == Cell::BoxOnGoal
    }

    pub fn is_player(self) -> bool {
        self == Cell::Player || self == Cell::PlayerOnGoal
    }

    pub fn is_vacant(self) -> bool {
        match self {
            Cell::Floor | Cell::Goal | Cell::Ground => true,
            _ => false,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
