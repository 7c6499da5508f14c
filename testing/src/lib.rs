//! # Testbed Testing
//!
//! Testing utilities and helpers for the testbed crates.
//!
//! This crate provides:
//! - Recording mocks of the exam repositories ([`mocks`])
//! - Shared fixtures for accounts and exams ([`fixtures`])
//! - Suite and per-test lifecycle guards ([`lifecycle`])
//! - Run conditions and assumptions ([`conditions`])
//! - Run configuration read from the environment ([`config`])
//! - Parameter sources backed by files or functions ([`params`])
//! - A Given-When-Then harness ([`scenario`])
//!
//! ## Example
//!
//! ```
//! use testbed_exams::{DefaultExamService, ExamService};
//! use testbed_testing::{fixtures, MockExamRepository, MockQuestionRepository, TestCase};
//!
//! let _case = TestCase::begin("no exam, no question lookup");
//!
//! let exams = MockExamRepository::new();
//! let questions = MockQuestionRepository::new().returning(fixtures::questions());
//! let service = DefaultExamService::new(exams.clone(), questions.clone());
//!
//! assert!(service.find_exam_by_name_with_questions("Math").unwrap().is_none());
//! exams.verify_find_all_called(1);
//! questions.verify_never_called();
//! ```

pub mod conditions;
pub mod config;
pub mod fixtures;
pub mod lifecycle;
pub mod mocks;
pub mod params;
pub mod scenario;

// Re-export commonly used items
pub use conditions::{Condition, Evaluation, Host, Os, assuming_that};
pub use config::{Profile, TestConfig};
pub use lifecycle::{Fixture, Repetition, TestCase, init_tracing};
pub use mocks::{MockExamRepository, MockQuestionRepository};
pub use scenario::Scenario;
