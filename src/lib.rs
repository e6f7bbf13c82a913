// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod config;
pub mod data;
pub mod engine;
pub mod input;
pub mod moves;
pub mod parser;
pub mod registry;
pub mod render;
pub mod session;

mod fs;
mod vec2d;

use std::error::Error;

use crate::registry::LevelRegistry;

pub use crate::board::{Board, BoardErr};
pub use crate::data::{Cell, Dir, Pos};
pub use crate::engine::MoveOutcome;
pub use crate::session::Session;

pub trait LoadLevels {
    /// Reads a level pack, see `LevelRegistry`'s `FromStr` impl for the format.
    fn load_levels(&self) -> Result<LevelRegistry, Box<dyn Error>>;
}
