//! Workspace config file source: config/config.toml and config/{env}.toml

use std::path::{Path, PathBuf};

/// Base workspace config file, also the target of `drill init`.
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join("config").join("config.toml")
}

/// Workspace config files that exist, lowest precedence first:
/// config/config.toml (base) then config/{DRILL_ENV}.toml (env-specific).
pub fn existing_files(workspace_root: &Path) -> Vec<PathBuf> {
    let env_name = std::env::var("DRILL_ENV").unwrap_or_else(|_| "development".to_string());
    let env_config_path = workspace_root
        .join("config")
        .join(format!("{}.toml", env_name));

    [workspace_config_path(workspace_root), env_config_path]
        .into_iter()
        .filter(|path| path.exists())
        .collect()
}
