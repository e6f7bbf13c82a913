use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedLevel {
    Empty,
    /// row, expected length, actual length
    RaggedRow(usize, usize, usize),
    /// row, column, symbol
    Symbol(usize, usize, char),
    NoPlayer,
    MultiplePlayers,
}

impl Display for MalformedLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MalformedLevel::Empty => write!(f, "Empty level"),
            MalformedLevel::RaggedRow(r, expected, actual) => write!(
                f,
                "Wrong length of row {}: expected {}, got {}",
                r, expected, actual
            ),
            MalformedLevel::Symbol(r, c, symbol) => {
                write!(f, "Invalid symbol {:?} at row {}, column {}", symbol, r, c)
            }
            MalformedLevel::NoPlayer => write!(f, "No player"),
            MalformedLevel::MultiplePlayers => write!(f, "More than one player"),
        }
    }
}

impl Error for MalformedLevel {}

/// Parses a level template - one string per row, all of the same length.
pub(crate) fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Vec2d<Cell>, MalformedLevel> {
    if rows.is_empty() {
        return Err(MalformedLevel::Empty);
    }

    let mut grid = Vec::with_capacity(rows.len());
    let mut expected_len = None;
    let mut player_pos = None;

    for (r, row) in rows.iter().enumerate() {
        let mut line_cells = Vec::new();
        for (c, symbol) in row.as_ref().chars().enumerate() {
            let cell = Cell::from_symbol(symbol).ok_or(MalformedLevel::Symbol(r, c, symbol))?;
            if cell.is_player() {
                if player_pos.is_some() {
                    return Err(MalformedLevel::MultiplePlayers);
                }
                player_pos = Some(Pos::new(c as i32, r as i32));
            }
            line_cells.push(cell);
        }

        let expected = *expected_len.get_or_insert(line_cells.len());
        if line_cells.len() != expected {
            return Err(MalformedLevel::RaggedRow(r, expected, line_cells.len()));
        }
        grid.push(line_cells);
    }

    if expected_len == Some(0) {
        return Err(MalformedLevel::Empty);
    }
    if player_pos.is_none() {
        return Err(MalformedLevel::NoPlayer);
    }

    Ok(Vec2d::new(grid))
}

/// Parses a level written as a single string.
///
/// Leading and trailing newlines are ignored so levels can be written as raw strings.
/// Trailing spaces are significant since they are floor.
pub(crate) fn parse(level: &str) -> Result<Vec2d<Cell>, MalformedLevel> {
    let level = level.trim_matches('\n');
    let rows: Vec<_> = level.lines().collect();
    parse_rows(&rows)
}
