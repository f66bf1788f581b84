//! Question banks: fixed pools of questions loaded from configuration.

use crate::error::ApiError;
use crate::level::LevelGenerator;
use crate::question::Question;
use parking_lot::Mutex;

/// A level backed by a fixed list of questions, served in order and wrapping around.
pub struct QuestionBank {
    questions: Vec<Question>,
    description: Option<String>,
    cursor: Mutex<usize>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            description: None,
            cursor: Mutex::new(0),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl LevelGenerator for QuestionBank {
    fn generate_question(&self) -> Result<Question, ApiError> {
        if self.questions.is_empty() {
            return Err(ApiError::GenerationFailed(
                "question bank is empty".to_string(),
            ));
        }

        let mut cursor = self.cursor.lock();
        let question = self.questions[*cursor].clone();
        *cursor = (*cursor + 1) % self.questions.len();
        Ok(question)
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn pool_size(&self) -> Option<usize> {
        Some(self.questions.len())
    }
}
