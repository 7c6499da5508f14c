//! Exam record.

use serde::{Deserialize, Serialize};

/// Numeric exam identifier
pub type ExamId = u64;

/// An exam and, once enriched, its questions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// Exam identifier
    pub id: ExamId,
    /// Exam name
    pub name: String,
    /// Questions, `None` until attached by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<String>>,
}

impl Exam {
    /// Creates an exam without questions
    #[must_use]
    pub fn new(id: ExamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            questions: None,
        }
    }

    /// Attaches questions, replacing any previous ones
    #[must_use]
    pub fn with_questions(mut self, questions: Vec<String>) -> Self {
        self.questions = Some(questions);
        self
    }

    /// Questions attached so far, empty if none
    #[must_use]
    pub fn questions(&self) -> &[String] {
        self.questions.as_deref().unwrap_or_default()
    }
}
