use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use fnv::FnvHashMap;
use log::debug;

use crate::board::Board;
use crate::parser::MalformedLevel;

const LEVEL_0: [&str; 12] = [
    "############",
    "#.         #",
    "########   #",
    "#    ##### #",
    "#          #",
    "#    # @$  #",
    "#    #     #",
    "#    #    ##",
    "#    ##    #",
    "#          #",
    "#  #       #",
    "############",
];

const LEVEL_1: [&str; 12] = [
    "------------",
    "------------",
    "--#######---",
    "--# ..$ #---",
    "--# # $ #---",
    "--# # # #---",
    "--# $@# #---",
    "--#.$ #-----",
    "--#.#####---",
    "--###-------",
    "------------",
    "------------",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryErr {
    UnknownLevel(String),
    DuplicateLevel(String),
    Malformed(String, MalformedLevel),
}

impl Display for RegistryErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            RegistryErr::UnknownLevel(ref id) => write!(f, "Unknown level: {}", id),
            RegistryErr::DuplicateLevel(ref id) => write!(f, "Level {} defined more than once", id),
            RegistryErr::Malformed(ref id, ref err) => write!(f, "Malformed level {}: {}", id, err),
        }
    }
}

impl Error for RegistryErr {}

/// Level templates by id.
///
/// Templates are validated when inserted and never modified,
/// every board is parsed from them anew.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelRegistry {
    levels: FnvHashMap<String, Vec<String>>,
}

impl LevelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The levels that come with the game.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &(id, rows) in &[("level_0", &LEVEL_0), ("level_1", &LEVEL_1)] {
            registry.levels.insert(id.to_string(), rows.iter().map(|r| r.to_string()).collect());
        }
        registry
    }

    pub fn insert<S: AsRef<str>>(&mut self, id: &str, rows: &[S]) -> Result<(), RegistryErr> {
        if self.levels.contains_key(id) {
            return Err(RegistryErr::DuplicateLevel(id.to_string()));
        }
        Board::from_rows(rows).map_err(|err| RegistryErr::Malformed(id.to_string(), err))?;
        let rows = rows.iter().map(|r| r.as_ref().to_string()).collect();
        self.levels.insert(id.to_string(), rows);
        debug!("Added level {}", id);
        Ok(())
    }

    pub fn template(&self, id: &str) -> Option<&[String]> {
        self.levels.get(id).map(|rows| &rows[..])
    }

    /// Sorted so listings are stable
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.levels.keys().map(|id| id.as_str()).collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Fresh board for level `id`, nothing carries over from previous boards.
    pub fn new_board(&self, id: &str) -> Result<Board, RegistryErr> {
        let rows = self
            .template(id)
            .ok_or_else(|| RegistryErr::UnknownLevel(id.to_string()))?;
        Board::from_rows(rows).map_err(|err| RegistryErr::Malformed(id.to_string(), err))
    }

    /// Adds the level collected so far in a pack, if any.
    fn flush(&mut self, name: &mut Option<String>, rows: &mut Vec<&str>) -> Result<(), RegistryErr> {
        if rows.is_empty() {
            return Ok(());
        }
        let id = match name.take() {
            Some(id) => id,
            // skip numbers taken by levels named in the pack
            None => (self.len()..)
                .map(|index| format!("level_{}", index))
                .find(|id| !self.levels.contains_key(id))
                .unwrap_or_default(),
        };
        self.insert(&id, rows)?;
        rows.clear();
        Ok(())
    }
}

/// Parses a level pack.
///
/// Levels are separated by empty lines, a line starting with `;` names the level after it.
/// Unnamed levels get `level_<n>` where n is their index in the pack.
impl FromStr for LevelRegistry {
    type Err = RegistryErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut registry = LevelRegistry::new();
        let mut name = None;
        let mut rows = Vec::new();

        // trailing empty line flushes the last level
        for line in s.lines().chain(Some("")) {
            if line.starts_with(';') {
                registry.flush(&mut name, &mut rows)?;
                name = Some(line[1..].trim().to_string());
            } else if line.is_empty() {
                registry.flush(&mut name, &mut rows)?;
            } else {
                rows.push(line);
            }
        }

        Ok(registry)
    }
}
