//! `[levels]` tables read straight from each file with `toml`.
//!
//! The `config` crate folds map keys to lowercase, but level keys are matched
//! case-sensitively, so this table bypasses it.

use crate::config::LevelConfig;
use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct LevelsOnly {
    #[serde(default)]
    levels: HashMap<String, LevelConfig>,
}

/// Read the `[levels]` table of one config file, keys as written.
pub fn read_levels(path: &Path) -> Result<HashMap<String, LevelConfig>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let parsed: LevelsOnly = toml::from_str(&content).map_err(|e| ConfigError::FileParse {
        uri: Some(path.display().to_string()),
        cause: Box::new(e),
    })?;
    Ok(parsed.levels)
}

/// Merge the levels of each file, lowest precedence first.
/// A level defined in a later file replaces the whole earlier definition.
pub fn merge_levels(paths: &[PathBuf]) -> Result<HashMap<String, LevelConfig>, ConfigError> {
    let mut levels = HashMap::new();
    for path in paths {
        levels.extend(read_levels(path)?);
    }
    Ok(levels)
}
