//! Recording mocks for the exam repositories.
//!
//! Each mock is stubbed up front, records every call, and offers `verify_*`
//! assertions afterwards. Clones share their state, so a test keeps one
//! handle and moves another into the service under test:
//!
//! ```
//! use testbed_exams::{DefaultExamService, ExamService};
//! use testbed_testing::{fixtures, MockExamRepository, MockQuestionRepository};
//!
//! let exams = MockExamRepository::new().returning(fixtures::exams());
//! let questions = MockQuestionRepository::new().returning(fixtures::questions());
//! let service = DefaultExamService::new(exams.clone(), questions.clone());
//!
//! let exam = service.find_exam_by_name_with_questions("Math").unwrap().unwrap();
//! assert_eq!(exam.questions().len(), 4);
//!
//! exams.verify_find_all_called(1);
//! questions.verify_requested(5);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use testbed_exams::{Exam, ExamId, ExamRepository, QuestionRepository, RepositoryError};

/// What a stubbed call answers with
#[derive(Clone, Debug)]
enum Stub<T> {
    /// Not stubbed: answer with the empty default
    Unset,
    Return(T),
    Fail(RepositoryError),
}

impl<T: Clone + Default> Stub<T> {
    fn answer(&self) -> Result<T, RepositoryError> {
        match self {
            Self::Unset => Ok(T::default()),
            Self::Return(value) => Ok(value.clone()),
            Self::Fail(error) => Err(error.clone()),
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
struct ExamRepositoryState {
    stub: Stub<Vec<Exam>>,
    find_all_calls: usize,
}

/// Mock [`ExamRepository`].
///
/// Unstubbed, `find_all` answers with an empty list.
#[derive(Clone, Debug)]
pub struct MockExamRepository {
    state: Arc<RwLock<ExamRepositoryState>>,
}

impl MockExamRepository {
    /// Create an unstubbed mock
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(ExamRepositoryState {
                stub: Stub::Unset,
                find_all_calls: 0,
            })),
        }
    }

    /// Stub `find_all` to return `exams`
    #[must_use]
    pub fn returning(self, exams: Vec<Exam>) -> Self {
        self.will_return(exams);
        self
    }

    /// Stub `find_all` to fail with `error`
    #[must_use]
    pub fn failing(self, error: RepositoryError) -> Self {
        self.will_fail(error);
        self
    }

    /// Stub `find_all` to return `exams`, through a shared handle
    pub fn will_return(&self, exams: Vec<Exam>) {
        write(&self.state).stub = Stub::Return(exams);
    }

    /// Stub `find_all` to fail with `error`, through a shared handle
    pub fn will_fail(&self, error: RepositoryError) {
        write(&self.state).stub = Stub::Fail(error);
    }

    /// Number of `find_all` calls so far
    #[must_use]
    pub fn find_all_calls(&self) -> usize {
        read(&self.state).find_all_calls
    }

    /// Assert that `find_all` was called exactly `times` times.
    ///
    /// # Panics
    ///
    /// Panics if the call count differs (this is a test assertion).
    #[track_caller]
    pub fn verify_find_all_called(&self, times: usize) {
        let calls = self.find_all_calls();
        assert_eq!(
            calls, times,
            "Expected find_all to be called {times} time(s), but it was called {calls} time(s)"
        );
    }
}

impl Default for MockExamRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamRepository for MockExamRepository {
    fn find_all(&self) -> Result<Vec<Exam>, RepositoryError> {
        let mut state = write(&self.state);
        state.find_all_calls += 1;
        state.stub.answer()
    }
}

#[derive(Debug)]
struct QuestionRepositoryState {
    any_id: Stub<Vec<String>>,
    by_id: HashMap<ExamId, Vec<String>>,
    requested: Vec<ExamId>,
}

/// Mock [`QuestionRepository`].
///
/// Answers from a per-id stub first, then the any-id stub, then an empty
/// list.
#[derive(Clone, Debug)]
pub struct MockQuestionRepository {
    state: Arc<RwLock<QuestionRepositoryState>>,
}

impl MockQuestionRepository {
    /// Create an unstubbed mock
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(QuestionRepositoryState {
                any_id: Stub::Unset,
                by_id: HashMap::new(),
                requested: Vec::new(),
            })),
        }
    }

    /// Stub every id to return `questions`
    #[must_use]
    pub fn returning(self, questions: Vec<String>) -> Self {
        self.will_return(questions);
        self
    }

    /// Stub exam `id` to return `questions`
    #[must_use]
    pub fn returning_for(self, id: ExamId, questions: Vec<String>) -> Self {
        self.will_return_for(id, questions);
        self
    }

    /// Stub every id without a per-id answer to fail with `error`
    #[must_use]
    pub fn failing(self, error: RepositoryError) -> Self {
        self.will_fail(error);
        self
    }

    /// Stub every id to return `questions`, through a shared handle
    pub fn will_return(&self, questions: Vec<String>) {
        write(&self.state).any_id = Stub::Return(questions);
    }

    /// Stub exam `id` to return `questions`, through a shared handle
    pub fn will_return_for(&self, id: ExamId, questions: Vec<String>) {
        write(&self.state).by_id.insert(id, questions);
    }

    /// Stub every id without a per-id answer to fail, through a shared handle
    pub fn will_fail(&self, error: RepositoryError) {
        write(&self.state).any_id = Stub::Fail(error);
    }

    /// Exam ids requested so far, in call order
    #[must_use]
    pub fn requested_ids(&self) -> Vec<ExamId> {
        read(&self.state).requested.clone()
    }

    /// Assert that the questions of exam `id` were requested.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never requested (this is a test assertion).
    #[track_caller]
    pub fn verify_requested(&self, id: ExamId) {
        let requested = self.requested_ids();
        assert!(
            requested.contains(&id),
            "Expected questions of exam {id} to be requested, but requests were {requested:?}"
        );
    }

    /// Assert that no questions were requested at all.
    ///
    /// # Panics
    ///
    /// Panics if any request was made (this is a test assertion).
    #[track_caller]
    pub fn verify_never_called(&self) {
        let requested = self.requested_ids();
        assert!(
            requested.is_empty(),
            "Expected no question lookups, but requests were {requested:?}"
        );
    }
}

impl Default for MockQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionRepository for MockQuestionRepository {
    fn find_questions_by_exam_id(&self, id: ExamId) -> Result<Vec<String>, RepositoryError> {
        let mut state = write(&self.state);
        state.requested.push(id);
        match state.by_id.get(&id) {
            Some(questions) => Ok(questions.clone()),
            None => state.any_id.answer(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_unstubbed_exam_mock_returns_empty() {
        let mock = MockExamRepository::new();
        assert!(mock.find_all().unwrap().is_empty());
        mock.verify_find_all_called(1);
    }

    #[test]
    fn test_clones_share_recorded_calls() {
        let mock = MockExamRepository::new().returning(vec![Exam::new(5, "Math")]);
        let handle = mock.clone();

        mock.find_all().unwrap();
        mock.find_all().unwrap();

        assert_eq!(handle.find_all_calls(), 2);
    }

    #[test]
    fn test_failing_stub() {
        let mock = MockExamRepository::new().failing(RepositoryError::Interrupted);
        assert_eq!(mock.find_all(), Err(RepositoryError::Interrupted));
    }

    #[test]
    fn test_question_mock_prefers_per_id_stub() {
        let mock = MockQuestionRepository::new()
            .returning(vec!["any".to_string()])
            .returning_for(5, vec!["five".to_string()]);

        assert_eq!(mock.find_questions_by_exam_id(5).unwrap(), ["five"]);
        assert_eq!(mock.find_questions_by_exam_id(6).unwrap(), ["any"]);
        assert_eq!(mock.requested_ids(), [5, 6]);
    }

    #[test]
    #[should_panic(expected = "Expected no question lookups")]
    fn test_verify_never_called_fails_after_lookup() {
        let mock = MockQuestionRepository::new();
        mock.find_questions_by_exam_id(1).unwrap();
        mock.verify_never_called();
    }
}
