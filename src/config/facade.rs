//! Config loader: the single entry point for building a `DrillConfig`.

use super::merge_policy::builder_with_defaults;
use super::sources::{global_file, level_tables, workspace_file};
use super::DrillConfig;
use crate::logging::LoggingConfig;
use config::{ConfigError, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything except `[levels]`, merged by the `config` crate
#[derive(Debug, Default, Deserialize)]
struct LayeredSettings {
    #[serde(default)]
    logging: LoggingConfig,
}

/// Loads configuration from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace base
    /// file, workspace env-specific file.
    pub fn load(workspace_root: &Path) -> Result<DrillConfig, ConfigError> {
        let mut paths: Vec<PathBuf> = global_file::existing_file().into_iter().collect();
        paths.extend(workspace_file::existing_files(workspace_root));

        let config = Self::load_layers(&paths, false)?;
        debug!(
            workspace = %workspace_root.display(),
            levels = config.levels.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a single file, bypassing the layered lookup
    pub fn load_from_file(path: &Path) -> Result<DrillConfig, ConfigError> {
        Self::load_layers(&[path.to_path_buf()], true)
    }

    /// Path of the global config file, if a home directory is known
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn load_layers(paths: &[PathBuf], required: bool) -> Result<DrillConfig, ConfigError> {
        let mut builder = builder_with_defaults()?;
        for path in paths {
            builder = builder.add_source(File::from(path.as_path()).required(required));
        }
        let settings: LayeredSettings = builder.build()?.try_deserialize()?;

        Ok(DrillConfig {
            levels: level_tables::merge_levels(paths)?,
            logging: settings.logging,
        })
    }
}
