//! Exam lookup by name, optionally enriched with the exam's questions.
//!
//! [`DefaultExamService`] depends only on the [`ExamRepository`] and
//! [`QuestionRepository`] traits, so tests can hand it mocks and check
//! which lookups were made.
//!
//! # Example
//!
//! ```
//! use testbed_exams::{
//!     DefaultExamService, Exam, ExamService, InMemoryExamRepository,
//!     InMemoryQuestionRepository,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exams = InMemoryExamRepository::new(vec![Exam::new(5, "Math"), Exam::new(6, "Languages")]);
//! let questions = InMemoryQuestionRepository::new().with_questions(5, ["calculus", "geometry"]);
//! let service = DefaultExamService::new(exams, questions);
//!
//! let math = service.find_exam_by_name_with_questions("Math")?;
//! assert_eq!(math.map(|e| e.questions().len()), Some(2));
//! assert!(service.find_exam_by_name("Chemistry")?.is_none());
//! # Ok(())
//! # }
//! ```

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Exam, ExamId};
pub use repository::{
    ExamRepository, InMemoryExamRepository, InMemoryQuestionRepository, QuestionRepository,
    RepositoryError,
};
pub use service::{DefaultExamService, ExamService, ExamServiceError};
