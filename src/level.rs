//! Levels: the question-generation capability and the registry that keys it.

pub mod bank;
pub mod registry;

pub use bank::QuestionBank;
pub use registry::LevelRegistry;

use crate::error::ApiError;
use crate::question::Question;

/// A source of questions for one level.
///
/// Implementations own their generation logic entirely; the router neither
/// inspects nor wraps what they return.
pub trait LevelGenerator: Send + Sync {
    fn generate_question(&self) -> Result<Question, ApiError>;

    /// Human-readable summary for listings
    fn description(&self) -> Option<&str> {
        None
    }

    /// Number of distinct questions, when the level has a fixed pool
    fn pool_size(&self) -> Option<usize> {
        None
    }
}

impl<F> LevelGenerator for F
where
    F: Fn() -> Result<Question, ApiError> + Send + Sync,
{
    fn generate_question(&self) -> Result<Question, ApiError> {
        self()
    }
}
