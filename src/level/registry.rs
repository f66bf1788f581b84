//! Level registry: in-memory map from level key to generator.

use crate::config::DrillConfig;
use crate::error::ApiError;
use crate::level::{LevelGenerator, QuestionBank};
use crate::question::Question;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry of level generators keyed by level key
#[derive(Default)]
pub struct LevelRegistry {
    levels: HashMap<String, Arc<dyn LevelGenerator>>,
}

impl LevelRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, replacing any previous entry for the key
    pub fn register<G>(&mut self, key: impl Into<String>, generator: G)
    where
        G: LevelGenerator + 'static,
    {
        self.register_shared(key, Arc::new(generator));
    }

    /// Register a plain function or closure as a level
    pub fn register_fn<F>(&mut self, key: impl Into<String>, generate: F)
    where
        F: Fn() -> Result<Question, ApiError> + Send + Sync + 'static,
    {
        self.register(key, generate);
    }

    /// Register an already shared generator
    pub fn register_shared(&mut self, key: impl Into<String>, generator: Arc<dyn LevelGenerator>) {
        let key = key.into();
        debug!(level_key = %key, "Registering level");
        self.levels.insert(key, generator);
    }

    /// Get the generator for a level key
    pub fn get(&self, key: &str) -> Option<Arc<dyn LevelGenerator>> {
        self.levels.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.levels.contains_key(key)
    }

    /// Remove a level from the registry
    pub fn remove(&mut self, key: &str) -> Option<Arc<dyn LevelGenerator>> {
        self.levels.remove(key)
    }

    /// All registered keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.levels.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn describe(&self, key: &str) -> Option<String> {
        self.levels
            .get(key)
            .and_then(|level| level.description().map(str::to_string))
    }

    /// Register one question bank per configured level
    pub fn load_from_config(&mut self, config: &DrillConfig) {
        for (key, level_config) in &config.levels {
            let mut bank = QuestionBank::new(level_config.questions.clone());
            if let Some(description) = &level_config.description {
                bank = bank.with_description(description.clone());
            }
            self.register(key.clone(), bank);
        }
    }
}
