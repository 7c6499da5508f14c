//! Given-When-Then harness
//!
//! Fluent API for tests that start from a value, apply one operation to it
//! and check both the resulting value and what the operation returned.

#![allow(clippy::module_name_repetitions)]

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for outcome assertion functions
type OutcomeAssertion<O> = Box<dyn FnOnce(&O)>;

/// Type alias for the operation under test
type Operation<S, O> = Box<dyn FnOnce(&mut S) -> O>;

/// Fluent Given-When-Then test
///
/// # Example
///
/// ```
/// use testbed_banking::BankingError;
/// use testbed_testing::{fixtures, scenario::assertions, Scenario};
///
/// Scenario::new()
///     .given(fixtures::default_account())
///     .when(|account| account.debit(&fixtures::money("2000")))
///     .then_outcome(|outcome| assertions::assert_err(outcome, &BankingError::InsufficientFunds))
///     .then_state(|account| assert_eq!(account.balance().to_string(), "1000.12345"))
///     .run();
/// ```
pub struct Scenario<S, O> {
    initial_state: Option<S>,
    operation: Option<Operation<S, O>>,
    state_assertions: Vec<StateAssertion<S>>,
    outcome_assertions: Vec<OutcomeAssertion<O>>,
}

impl<S, O> Scenario<S, O> {
    /// Create an empty scenario
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_state: None,
            operation: None,
            state_assertions: Vec::new(),
            outcome_assertions: Vec::new(),
        }
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the operation to test (When)
    #[must_use]
    pub fn when<F>(mut self, operation: F) -> Self
    where
        F: FnOnce(&mut S) -> O + 'static,
    {
        self.operation = Some(Box::new(operation));
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about what the operation returned (Then)
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&O) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Run the operation and every assertion, returning the final state
    ///
    /// # Panics
    ///
    /// Panics if the initial state or the operation is not set,
    /// or if any assertion fails.
    #[allow(clippy::expect_used)] // Test code can use expect
    #[track_caller]
    pub fn run(self) -> S {
        let mut state = self
            .initial_state
            .expect("Initial state must be set with given()");
        let operation = self.operation.expect("Operation must be set with when()");

        let outcome = operation(&mut state);

        for assertion in self.outcome_assertions {
            assertion(&outcome);
        }
        for assertion in self.state_assertions {
            assertion(&state);
        }
        state
    }
}

impl<S, O> Default for Scenario<S, O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper assertions for operation outcomes
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that the operation succeeded
    ///
    /// # Panics
    ///
    /// Panics if `outcome` is an error.
    #[track_caller]
    pub fn assert_ok<T, E: Debug>(outcome: &Result<T, E>) {
        if let Err(error) = outcome {
            panic_with(&format!("Expected success, but got error {error:?}"));
        }
    }

    /// Assert that the operation failed with `expected`
    ///
    /// # Panics
    ///
    /// Panics if `outcome` succeeded or failed with a different error.
    #[track_caller]
    pub fn assert_err<T: Debug, E: Debug + PartialEq>(outcome: &Result<T, E>, expected: &E) {
        match outcome {
            Ok(value) => panic_with(&format!(
                "Expected error {expected:?}, but got success {value:?}"
            )),
            Err(error) => assert_eq!(error, expected, "Unexpected error"),
        }
    }

    #[allow(clippy::panic)] // Test assertion
    #[track_caller]
    fn panic_with(message: &str) -> ! {
        panic!("{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum CounterError {
        Underflow,
    }

    fn decrement(count: &mut u32) -> Result<(), CounterError> {
        *count = count.checked_sub(1).ok_or(CounterError::Underflow)?;
        Ok(())
    }

    #[test]
    fn test_scenario_success() {
        let state = Scenario::new()
            .given(5_u32)
            .when(decrement)
            .then_outcome(assertions::assert_ok)
            .then_state(|count| assert_eq!(*count, 4))
            .run();
        assert_eq!(state, 4);
    }

    #[test]
    fn test_scenario_failure_keeps_state() {
        Scenario::new()
            .given(0_u32)
            .when(decrement)
            .then_outcome(|outcome| assertions::assert_err(outcome, &CounterError::Underflow))
            .then_state(|count| assert_eq!(*count, 0))
            .run();
    }

    #[test]
    #[should_panic(expected = "Operation must be set")]
    fn test_scenario_without_operation_panics() {
        Scenario::<u32, ()>::new().given(1).run();
    }

    #[test]
    #[should_panic(expected = "Expected success")]
    fn test_assert_ok_rejects_error() {
        assertions::assert_ok::<(), _>(&Err(CounterError::Underflow));
    }
}
