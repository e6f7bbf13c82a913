use std::fmt::{self, Display, Formatter};

/// Edge of a tile in pixels, the tile set uses 32x32 sprites.
pub const DEFAULT_TILE_SIZE: u32 = 32;

pub const DEFAULT_LEVEL: &str = "level_0";

/// How click coordinates are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Pixels,
    Cells,
}

impl Display for InputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            InputMode::Pixels => write!(f, "pixels"),
            InputMode::Cells => write!(f, "cells"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub tile_size: u32,
    pub input: InputMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tile_size: DEFAULT_TILE_SIZE,
            input: InputMode::Pixels,
        }
    }
}
