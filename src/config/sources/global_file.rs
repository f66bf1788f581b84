//! Global config file source: $XDG_CONFIG_HOME/drill/config.toml or ~/.config/drill/config.toml

use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    let config_home = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(std::env::var("HOME").ok()?).join(".config"),
    };
    Some(config_home.join("drill").join("config.toml"))
}

/// Global config file, if one exists.
pub fn existing_file() -> Option<PathBuf> {
    let path = global_config_path()?;
    if path.exists() {
        Some(path)
    } else {
        debug!(
            config_path = %path.display(),
            "No global configuration file; using workspace and defaults only"
        );
        None
    }
}
