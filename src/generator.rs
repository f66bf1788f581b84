//! Question generator: routes a level key to the registered level or to the fallback question.

use crate::error::ApiError;
use crate::level::LevelRegistry;
use crate::question::Question;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Facade over a level registry
///
/// The registry is injected and shared, so levels may be registered after the
/// generator is built.
pub struct QuestionGenerator {
    registry: Arc<RwLock<LevelRegistry>>,
    last_question_index: i64,
    last_questions_by_level: HashMap<String, Question>,
}

impl QuestionGenerator {
    pub fn new(registry: Arc<RwLock<LevelRegistry>>) -> Self {
        Self {
            registry,
            last_question_index: -1,
            last_questions_by_level: HashMap::new(),
        }
    }

    /// Build a generator that owns a fresh registry
    pub fn from_registry(registry: LevelRegistry) -> Self {
        Self::new(Arc::new(RwLock::new(registry)))
    }

    /// Produce a question for the given level
    ///
    /// A registered level's result is returned as-is, errors included. Unknown
    /// levels are not an error: they log the key and yield [`Question::fallback`].
    pub fn generate_question(&self, level_key: &str) -> Result<Question, ApiError> {
        // Release the read lock before delegating.
        let level = self.registry.read().get(level_key);

        match level {
            Some(level) => {
                debug!(level_key, "Delegating to registered level");
                level.generate_question()
            }
            None => {
                info!(level_key, "Level not yet implemented: {}", level_key);
                Ok(Question::fallback())
            }
        }
    }

    pub fn registry(&self) -> Arc<RwLock<LevelRegistry>> {
        Arc::clone(&self.registry)
    }

    pub fn last_question_index(&self) -> i64 {
        self.last_question_index
    }

    pub fn last_questions_by_level(&self) -> &HashMap<String, Question> {
        &self.last_questions_by_level
    }
}
