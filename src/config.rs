//! Configuration System
//!
//! Layered configuration for levels and logging. Sources are applied in order:
//! built-in defaults, the user's global file, then workspace files. Settings are
//! merged with the `config` crate; `[levels]` tables are read per file with
//! `toml` so level keys keep their case. Validation collects every problem
//! instead of stopping at the first.

use crate::logging::LoggingConfig;
use crate::question::Question;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::workspace_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Question banks keyed by level key
    #[serde(default)]
    pub levels: HashMap<String, LevelConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A configured level: a fixed pool of questions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Level(String, String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Level(key, msg) => write!(f, "Level '{}': {}", key, msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl LevelConfig {
    /// Validate a single level definition
    pub fn validate(&self) -> Result<(), String> {
        if self.questions.is_empty() {
            return Err("must define at least one question".to_string());
        }
        for (index, question) in self.questions.iter().enumerate() {
            if question.problem.trim().is_empty() {
                return Err(format!("question {} has an empty problem", index + 1));
            }
            if question.answer.trim().is_empty() {
                return Err(format!("question {} has an empty answer", index + 1));
            }
        }
        Ok(())
    }
}

impl DrillConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut keys: Vec<&String> = self.levels.keys().collect();
        keys.sort();
        for key in keys {
            if key.trim().is_empty() {
                errors.push(ValidationError::Level(
                    key.clone(),
                    "level key cannot be empty".to_string(),
                ));
            }
            if let Err(e) = self.levels[key].validate() {
                errors.push(ValidationError::Level(key.clone(), e));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Configuration written by `drill init`
    pub fn starter() -> Self {
        let mut levels = HashMap::new();
        levels.insert(
            "distributive".to_string(),
            LevelConfig {
                description: Some("Expand a(b + c)".to_string()),
                questions: vec![
                    Question::new("3(x + 4)", "3x + 12"),
                    Question::new("5(x - 2)", "5x - 10"),
                    Question::new("-2(x + 7)", "-2x - 14"),
                ],
            },
        );
        Self {
            levels,
            logging: LoggingConfig::default(),
        }
    }
}
