//! Logging System
//!
//! Structured logging using the `tracing` crate. Level, format, and destination
//! are configurable from the config file, CLI flags, and `DRILL_LOG*` environment
//! variables.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const VALID_FORMATS: &[&str] = &["text", "json"];
const VALID_OUTPUTS: &[&str] = &["stdout", "stderr", "file"];

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Install a subscriber at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file"); defaults to the platform state directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !VALID_FORMATS.contains(&self.format.as_str()) {
            return Err(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                self.format
            ));
        }
        if !VALID_OUTPUTS.contains(&self.output.as_str()) {
            return Err(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
                self.output
            ));
        }
        Ok(())
    }
}

/// Default log file: `drill.log` under the platform state (or local data) directory
pub fn default_log_file() -> PathBuf {
    directories::ProjectDirs::from("", "", "drill")
        .map(|dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_local_dir())
                .join("drill.log")
        })
        .unwrap_or_else(|| PathBuf::from("drill.log"))
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (DRILL_LOG, DRILL_LOG_FORMAT, DRILL_LOG_OUTPUT, DRILL_LOG_MODULES)
/// 2. The given configuration (already merged with CLI flags by the caller)
/// 3. Defaults
pub fn init_logging(config: &LoggingConfig) -> Result<(), ApiError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;
    let writer = build_writer(&output, config)?;
    let use_color = config.color && output != "file";

    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| ApiError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env("DRILL_LOG") {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);

    for (module, module_level) in &config.modules {
        filter = filter.add_directive(
            format!("{}={}", module, module_level)
                .parse()
                .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?,
        );
    }

    if let Ok(modules_str) = std::env::var("DRILL_LOG_MODULES") {
        for (module, module_level) in parse_module_directives(&modules_str) {
            filter = filter.add_directive(
                format!("{}={}", module, module_level)
                    .parse()
                    .map_err(|e| {
                        ApiError::ConfigError(format!("Invalid log directive from env: {}", e))
                    })?,
            );
        }
    }

    Ok(filter)
}

/// Parse `module=level,module=level`; malformed entries are skipped
fn parse_module_directives(spec: &str) -> Vec<(String, String)> {
    spec.split(',')
        .filter_map(|entry| {
            let (module, level) = entry.split_once('=')?;
            let (module, level) = (module.trim(), level.trim());
            if module.is_empty() || level.is_empty() {
                None
            } else {
                Some((module.to_string(), level.to_string()))
            }
        })
        .collect()
}

fn determine_format(config: &LoggingConfig) -> Result<String, ApiError> {
    if let Ok(format) = std::env::var("DRILL_LOG_FORMAT") {
        if VALID_FORMATS.contains(&format.as_str()) {
            return Ok(format);
        }
    }

    if !VALID_FORMATS.contains(&config.format.as_str()) {
        return Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            config.format
        )));
    }
    Ok(config.format.clone())
}

fn determine_output(config: &LoggingConfig) -> Result<String, ApiError> {
    let output = std::env::var("DRILL_LOG_OUTPUT").unwrap_or_else(|_| config.output.clone());

    if !VALID_OUTPUTS.contains(&output.as_str()) {
        return Err(ApiError::ConfigError(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            output
        )));
    }
    Ok(output)
}

fn build_writer(output: &str, config: &LoggingConfig) -> Result<BoxMakeWriter, ApiError> {
    match output {
        "stdout" => Ok(BoxMakeWriter::new(std::io::stdout)),
        "file" => {
            let log_file = config.file.clone().unwrap_or_else(default_log_file);
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApiError::ConfigError(format!("Failed to create log directory: {}", e))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .map_err(|e| {
                    ApiError::ConfigError(format!(
                        "Failed to open log file {}: {}",
                        log_file.display(),
                        e
                    ))
                })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        _ => Ok(BoxMakeWriter::new(std::io::stderr)),
    }
}
