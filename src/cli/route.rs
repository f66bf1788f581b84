//! CLI route: single route table and run context.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_levels_json, format_levels_text, format_questions, LevelSummary,
};
use crate::config::{workspace_config_path, ConfigLoader, DrillConfig, ValidationError};
use crate::error::ApiError;
use crate::generator::QuestionGenerator;
use crate::level::LevelRegistry;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded config and the question generator built from it.
pub struct RunContext {
    config: DrillConfig,
    generator: QuestionGenerator,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    /// The loaded configuration must validate.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        config.validate().map_err(validation_failed)?;
        Ok(Self::from_config(config, workspace_root))
    }

    /// Build a context from an already loaded configuration
    pub fn from_config(config: DrillConfig, workspace_root: PathBuf) -> Self {
        let mut registry = LevelRegistry::new();
        registry.load_from_config(&config);
        debug!(levels = registry.len(), "Level registry loaded");

        Self {
            config,
            generator: QuestionGenerator::from_registry(registry),
            workspace_root,
        }
    }

    pub fn generator(&self) -> &QuestionGenerator {
        &self.generator
    }

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Question {
                level,
                count,
                format,
                hide_answer,
            } => self.handle_question(level, *count, *format, *hide_answer),
            Commands::Levels { format } => self.handle_levels(*format),
            Commands::Validate => self.handle_validate(),
            Commands::Init { force } => handle_init(&self.workspace_root, *force),
        }
    }

    fn handle_question(
        &self,
        level: &str,
        count: usize,
        format: OutputFormat,
        hide_answer: bool,
    ) -> Result<String, ApiError> {
        let questions = (0..count)
            .map(|_| self.generator.generate_question(level))
            .collect::<Result<Vec<_>, _>>()?;
        format_questions(&questions, format, hide_answer)
    }

    fn handle_levels(&self, format: OutputFormat) -> Result<String, ApiError> {
        let shared = self.generator.registry();
        let registry = shared.read();
        let summaries: Vec<LevelSummary> = registry
            .keys()
            .into_iter()
            .map(|key| {
                let level = registry.get(&key);
                LevelSummary {
                    description: level
                        .as_ref()
                        .and_then(|l| l.description().map(str::to_string)),
                    questions: level.as_ref().and_then(|l| l.pool_size()),
                    key,
                }
            })
            .collect();

        if format == OutputFormat::Json {
            format_levels_json(&summaries)
        } else {
            Ok(format_levels_text(&summaries))
        }
    }

    fn handle_validate(&self) -> Result<String, ApiError> {
        self.config.validate().map_err(validation_failed)?;
        Ok(format!(
            "Configuration is valid ({} level{})",
            self.config.levels.len(),
            if self.config.levels.len() == 1 { "" } else { "s" }
        ))
    }
}

fn validation_failed(errors: Vec<ValidationError>) -> ApiError {
    let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    ApiError::ConfigError(format!(
        "Configuration validation failed:\n{}",
        error_msgs.join("\n")
    ))
}

fn handle_init(workspace_root: &Path, force: bool) -> Result<String, ApiError> {
    let path = workspace_config_path(workspace_root);
    if path.exists() && !force {
        return Err(ApiError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let content = toml::to_string_pretty(&DrillConfig::starter())
        .map_err(|e| ApiError::Serialization(e.to_string()))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, content)?;

    info!(path = %path.display(), "Wrote starter configuration");
    Ok(format!("Wrote starter configuration to {}", path.display()))
}
