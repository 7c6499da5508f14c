//! Exam service against mocked repositories.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use rstest::{fixture, rstest};
use testbed_exams::{
    DefaultExamService, Exam, ExamService, ExamServiceError, InMemoryExamRepository,
    InMemoryQuestionRepository, RepositoryError,
};
use testbed_testing::{MockExamRepository, MockQuestionRepository, TestCase, fixtures};

/// Service wired to fresh mocks, plus handles to stub and verify them
struct Harness {
    _case: TestCase,
    exams: MockExamRepository,
    questions: MockQuestionRepository,
}

impl Harness {
    fn service(&self) -> DefaultExamService<MockExamRepository, MockQuestionRepository> {
        DefaultExamService::new(self.exams.clone(), self.questions.clone())
    }
}

#[fixture]
fn harness() -> Harness {
    Harness {
        _case: TestCase::current(),
        exams: MockExamRepository::new(),
        questions: MockQuestionRepository::new(),
    }
}

#[rstest]
fn test_find_exam_by_name(harness: Harness) {
    harness.exams.will_return(fixtures::exams());

    let exam = harness.service().find_exam_by_name("Math").unwrap();

    assert!(exam.is_some());
    let exam = exam.unwrap();
    assert_eq!(exam.id, 5);
    assert_eq!(exam.name, "Math");
}

#[rstest]
fn test_find_exam_by_name_empty_list(harness: Harness) {
    let exam = harness.service().find_exam_by_name("Math").unwrap();
    assert!(exam.is_none());
}

#[rstest]
#[case::prefix("Mat", 5)]
#[case::suffix("tory", 7)]
#[case::whole("Languages", 6)]
fn test_find_exam_by_substring(harness: Harness, #[case] query: &str, #[case] expected_id: u64) {
    harness.exams.will_return(fixtures::exams());

    let exam = harness.service().find_exam_by_name(query).unwrap().unwrap();
    assert_eq!(exam.id, expected_id);
}

#[rstest]
fn test_questions_exam(harness: Harness) {
    harness.exams.will_return(fixtures::exams());
    harness.questions.will_return(fixtures::questions());

    let exam = harness
        .service()
        .find_exam_by_name_with_questions("Math")
        .unwrap()
        .unwrap();

    assert_eq!(exam.questions().len(), 4);
    assert!(exam.questions().iter().any(|q| q == "calculus"));
}

#[rstest]
fn test_questions_exam_verify(harness: Harness) {
    harness.exams.will_return(fixtures::exams());
    harness.questions.will_return(fixtures::questions());

    let exam = harness
        .service()
        .find_exam_by_name_with_questions("Math")
        .unwrap()
        .unwrap();
    assert_eq!(exam.questions().len(), 4);
    assert!(exam.questions().iter().any(|q| q == "calculus"));

    harness.exams.verify_find_all_called(1);
    harness.questions.verify_requested(5);
    assert_eq!(harness.questions.requested_ids(), [5]);
}

#[rstest]
fn test_no_exam_skips_question_lookup(harness: Harness) {
    harness.questions.will_return(fixtures::questions());

    let exam = harness
        .service()
        .find_exam_by_name_with_questions("Math")
        .unwrap();

    assert!(exam.is_none());
    harness.exams.verify_find_all_called(1);
    harness.questions.verify_never_called();
}

#[rstest]
fn test_questions_only_for_matched_exam(harness: Harness) {
    harness.exams.will_return(fixtures::exams());
    harness.questions.will_return_for(7, vec!["dates".to_string()]);
    harness.questions.will_return_for(5, fixtures::questions());

    let exam = harness
        .service()
        .find_exam_by_name_with_questions("History")
        .unwrap()
        .unwrap();

    assert_eq!(exam.questions(), ["dates"]);
    assert_eq!(harness.questions.requested_ids(), [7]);
}

#[rstest]
fn test_interrupted_catalog_propagates(harness: Harness) {
    harness.exams.will_fail(RepositoryError::Interrupted);

    let error = harness
        .service()
        .find_exam_by_name_with_questions("Math")
        .unwrap_err();

    assert_eq!(
        error,
        ExamServiceError::Repository(RepositoryError::Interrupted)
    );
    assert_eq!(error.to_string(), "Repository lookup interrupted");
    harness.questions.verify_never_called();
}

#[rstest]
fn test_failing_question_lookup_propagates(harness: Harness) {
    harness.exams.will_return(fixtures::exams());
    harness
        .questions
        .will_fail(RepositoryError::Unavailable("question store offline".to_string()));

    let error = harness
        .service()
        .find_exam_by_name_with_questions("Math")
        .unwrap_err();

    assert!(matches!(
        error,
        ExamServiceError::Repository(RepositoryError::Unavailable(_))
    ));
    harness.questions.verify_requested(5);
}

#[test]
fn test_in_memory_repositories_end_to_end() {
    let _case = TestCase::current();
    let exams = InMemoryExamRepository::from_json(
        r#"[{"id": 5, "name": "Math"}, {"id": 6, "name": "Languages"}, {"id": 7, "name": "History"}]"#,
    )
    .unwrap();
    let questions = InMemoryQuestionRepository::new().with_questions(5, fixtures::questions());
    let service = DefaultExamService::new(exams, questions);

    let math = service.find_exam_by_name_with_questions("Math").unwrap();
    assert_eq!(
        math,
        Some(Exam::new(5, "Math").with_questions(fixtures::questions()))
    );

    let languages = service
        .find_exam_by_name_with_questions("Languages")
        .unwrap()
        .unwrap();
    assert_eq!(languages.questions, Some(Vec::new()));
}
