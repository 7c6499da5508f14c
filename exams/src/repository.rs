//! Data-access collaborators for the exam service.
//!
//! The service only sees the two traits; tests substitute mocks, the
//! in-memory implementations here back demos and integration tests.

use crate::model::{Exam, ExamId};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by a repository
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The lookup was interrupted before it produced a result.
    #[error("Repository lookup interrupted")]
    Interrupted,

    /// The backing source cannot be reached.
    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    /// The backing source holds data that cannot be decoded.
    #[error("Invalid repository data: {0}")]
    InvalidData(String),
}

/// Source of every known exam
pub trait ExamRepository {
    /// Returns all exams in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the catalog cannot be read.
    fn find_all(&self) -> Result<Vec<Exam>, RepositoryError>;
}

/// Source of the questions belonging to an exam
pub trait QuestionRepository {
    /// Returns the questions of exam `id`, empty if it has none.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] if the questions cannot be read.
    fn find_questions_by_exam_id(&self, id: ExamId) -> Result<Vec<String>, RepositoryError>;
}

impl<T: ExamRepository + ?Sized> ExamRepository for Arc<T> {
    fn find_all(&self) -> Result<Vec<Exam>, RepositoryError> {
        (**self).find_all()
    }
}

impl<T: QuestionRepository + ?Sized> QuestionRepository for Arc<T> {
    fn find_questions_by_exam_id(&self, id: ExamId) -> Result<Vec<String>, RepositoryError> {
        (**self).find_questions_by_exam_id(id)
    }
}

/// Fixed exam catalog held in memory
#[derive(Clone, Debug, Default)]
pub struct InMemoryExamRepository {
    exams: Vec<Exam>,
}

impl InMemoryExamRepository {
    /// Creates a repository serving `exams`
    #[must_use]
    pub const fn new(exams: Vec<Exam>) -> Self {
        Self { exams }
    }

    /// Loads the catalog from a JSON array of exams.
    ///
    /// ```
    /// use testbed_exams::{ExamRepository, InMemoryExamRepository};
    ///
    /// let repo = InMemoryExamRepository::from_json(r#"[{"id": 5, "name": "Math"}]"#).unwrap();
    /// assert_eq!(repo.find_all().unwrap()[0].name, "Math");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::InvalidData`] if the document is not a
    /// JSON array of exams.
    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))
    }
}

impl ExamRepository for InMemoryExamRepository {
    fn find_all(&self) -> Result<Vec<Exam>, RepositoryError> {
        Ok(self.exams.clone())
    }
}

/// Questions indexed by exam id, held in memory
#[derive(Clone, Debug, Default)]
pub struct InMemoryQuestionRepository {
    questions: HashMap<ExamId, Vec<String>>,
}

impl InMemoryQuestionRepository {
    /// Creates an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the questions of exam `id`, replacing previous ones
    #[must_use]
    pub fn with_questions<I, S>(mut self, id: ExamId, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions
            .insert(id, questions.into_iter().map(Into::into).collect());
        self
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn find_questions_by_exam_id(&self, id: ExamId) -> Result<Vec<String>, RepositoryError> {
        Ok(self.questions.get(&id).cloned().unwrap_or_default())
    }
}
