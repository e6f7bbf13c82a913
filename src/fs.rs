use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use log::debug;

use crate::registry::LevelRegistry;
use crate::LoadLevels;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl LoadLevels for Path {
    fn load_levels(&self) -> Result<LevelRegistry, Box<dyn Error>> {
        let pack = read_file(self)?;
        let registry: LevelRegistry = pack.parse()?;
        debug!("Loaded {} levels from {}", registry.len(), self.display());
        Ok(registry)
    }
}

impl LoadLevels for str {
    fn load_levels(&self) -> Result<LevelRegistry, Box<dyn Error>> {
        Path::new(self).load_levels()
    }
}
