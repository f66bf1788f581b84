//! Question record returned by every level.

use serde::{Deserialize, Serialize};

/// Problem text of the placeholder question.
pub const FALLBACK_PROBLEM: &str = "2(x + 3)";

/// Answer text of the placeholder question.
pub const FALLBACK_ANSWER: &str = "2x + 6";

/// A practice question: the problem shown to the learner and its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub problem: String,
    pub answer: String,
}

impl Question {
    pub fn new(problem: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            answer: answer.into(),
        }
    }

    /// Placeholder served for levels with no registered generator
    pub fn fallback() -> Self {
        Self::new(FALLBACK_PROBLEM, FALLBACK_ANSWER)
    }
}
