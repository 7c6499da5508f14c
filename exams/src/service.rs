//! Exam lookup service.

use crate::model::Exam;
use crate::repository::{ExamRepository, QuestionRepository, RepositoryError};
use thiserror::Error;

/// Errors returned by [`ExamService`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExamServiceError {
    /// A collaborator failed; the failure is passed through unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Lookup of exams by name
pub trait ExamService {
    /// Returns the first exam whose name contains `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ExamServiceError::Repository`] if the exam catalog fails.
    fn find_exam_by_name(&self, name: &str) -> Result<Option<Exam>, ExamServiceError>;

    /// Same lookup as [`ExamService::find_exam_by_name`], with the exam's
    /// questions attached. When no exam matches, the questions are not
    /// looked up at all.
    ///
    /// # Errors
    ///
    /// Returns [`ExamServiceError::Repository`] if either repository fails.
    fn find_exam_by_name_with_questions(
        &self,
        name: &str,
    ) -> Result<Option<Exam>, ExamServiceError>;
}

/// [`ExamService`] backed by an exam repository and a question repository
#[derive(Clone, Debug)]
pub struct DefaultExamService<E, Q> {
    exams: E,
    questions: Q,
}

impl<E, Q> DefaultExamService<E, Q>
where
    E: ExamRepository,
    Q: QuestionRepository,
{
    /// Creates a service over the given repositories
    #[must_use]
    pub const fn new(exams: E, questions: Q) -> Self {
        Self { exams, questions }
    }
}

impl<E, Q> ExamService for DefaultExamService<E, Q>
where
    E: ExamRepository,
    Q: QuestionRepository,
{
    #[tracing::instrument(skip(self))]
    fn find_exam_by_name(&self, name: &str) -> Result<Option<Exam>, ExamServiceError> {
        let found = self
            .exams
            .find_all()?
            .into_iter()
            .find(|exam| exam.name.contains(name));

        match &found {
            Some(exam) => tracing::debug!(id = exam.id, "Exam found"),
            None => tracing::debug!("No exam matches"),
        }
        Ok(found)
    }

    #[tracing::instrument(skip(self))]
    fn find_exam_by_name_with_questions(
        &self,
        name: &str,
    ) -> Result<Option<Exam>, ExamServiceError> {
        let Some(exam) = self.find_exam_by_name(name)? else {
            return Ok(None);
        };

        let questions = self.questions.find_questions_by_exam_id(exam.id)?;
        tracing::debug!(id = exam.id, count = questions.len(), "Questions attached");
        Ok(Some(exam.with_questions(questions)))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::model::ExamId;
    use crate::repository::{InMemoryExamRepository, InMemoryQuestionRepository};
    use std::cell::Cell;

    fn catalog() -> InMemoryExamRepository {
        InMemoryExamRepository::new(vec![
            Exam::new(5, "Math"),
            Exam::new(6, "Languages"),
            Exam::new(7, "History"),
        ])
    }

    struct Interrupted;

    impl ExamRepository for Interrupted {
        fn find_all(&self) -> Result<Vec<Exam>, RepositoryError> {
            Err(RepositoryError::Interrupted)
        }
    }

    /// Counts lookups and always answers with nothing.
    #[derive(Default)]
    struct CountingQuestions {
        calls: Cell<usize>,
    }

    impl QuestionRepository for CountingQuestions {
        fn find_questions_by_exam_id(&self, _id: ExamId) -> Result<Vec<String>, RepositoryError> {
            self.calls.set(self.calls.get() + 1);
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_find_by_substring() {
        let service = DefaultExamService::new(catalog(), InMemoryQuestionRepository::new());

        let exam = service.find_exam_by_name("Hist").unwrap().unwrap();
        assert_eq!(exam.id, 7);
        assert_eq!(exam.questions, None);
    }

    #[test]
    fn test_find_returns_first_match() {
        let repo = InMemoryExamRepository::new(vec![Exam::new(1, "Math I"), Exam::new(2, "Math II")]);
        let service = DefaultExamService::new(repo, InMemoryQuestionRepository::new());

        assert_eq!(service.find_exam_by_name("Math").unwrap().unwrap().id, 1);
    }

    #[test]
    fn test_find_with_questions_attaches_them() {
        let questions = InMemoryQuestionRepository::new().with_questions(5, ["arithmetic", "calculus"]);
        let service = DefaultExamService::new(catalog(), questions);

        let exam = service
            .find_exam_by_name_with_questions("Math")
            .unwrap()
            .unwrap();
        assert_eq!(exam.questions(), ["arithmetic", "calculus"]);
    }

    #[test]
    fn test_no_match_skips_question_lookup() {
        let service = DefaultExamService::new(InMemoryExamRepository::default(), CountingQuestions::default());

        assert_eq!(service.find_exam_by_name_with_questions("Math").unwrap(), None);
        assert_eq!(service.questions.calls.get(), 0);
    }

    #[test]
    fn test_interrupted_repository_propagates() {
        let service = DefaultExamService::new(Interrupted, CountingQuestions::default());

        assert_eq!(
            service.find_exam_by_name("Math"),
            Err(ExamServiceError::Repository(RepositoryError::Interrupted))
        );
        assert_eq!(
            service.find_exam_by_name_with_questions("Math"),
            Err(ExamServiceError::Repository(RepositoryError::Interrupted))
        );
        assert_eq!(service.questions.calls.get(), 0);
    }
}
