//! Per-suite and per-test lifecycle hooks.
//!
//! - [`init_tracing`] runs once per test binary (before all).
//! - [`TestCase`] is a guard logging setup when created and teardown when
//!   dropped (before each, after each), including when the test panics.
//! - [`Fixture`] pairs a guard with the value a test starts from.
//!
//! There is no after-all hook. The standard test harness exits the process
//! once the last test finishes without running anything registered by the
//! tests, and `OnceLock` values are never dropped, so the suite's closing
//! line is the last test's "Finalizing test method".
//!
//! ```
//! use testbed_testing::{fixtures, TestCase};
//!
//! let mut account = TestCase::begin("debit").fixture(fixtures::default_account);
//! account.debit(&fixtures::money("100")).unwrap();
//! assert_eq!(account.balance().to_string(), "900.12345");
//! // guard dropped here: "Finalizing test method"
//! ```

use crate::config::TestConfig;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::OnceLock;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

static SUITE: OnceLock<TestConfig> = OnceLock::new();

/// Install the test log subscriber and load the run configuration, once.
///
/// `RUST_LOG` wins over the configured filter. An invalid configuration is
/// reported and replaced by the defaults so a typo does not fail every test.
pub fn init_tracing() -> &'static TestConfig {
    SUITE.get_or_init(|| {
        let (config, problem) = match TestConfig::from_env() {
            Ok(config) => (config, None),
            Err(error) => (TestConfig::default(), Some(error)),
        };

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
        install_subscriber(filter);

        if let Some(error) = problem {
            tracing::warn!(%error, "Invalid test configuration, using defaults");
        }
        tracing::info!(profile = %config.profile, "Initializing the test suite");
        config
    })
}

/// Install the test writer subscriber, returning `false` if the process
/// already has a global subscriber (the binary under test may install one).
fn install_subscriber(filter: EnvFilter) -> bool {
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
    {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(%error, "Log subscriber already installed, keeping it");
            false
        }
    }
}

/// Guard around a single test.
#[derive(Debug)]
pub struct TestCase {
    name: String,
    started: Instant,
}

impl TestCase {
    /// Start a test, initializing the suite first if needed
    #[must_use]
    pub fn begin(name: impl Into<String>) -> Self {
        init_tracing();
        let name = name.into();
        tracing::info!(test = %name, "Initializing the test method");
        Self {
            name,
            started: Instant::now(),
        }
    }

    /// Start a test named after the running test thread.
    ///
    /// The test harness names each test's thread after the test path, so
    /// this picks up `module::test_name` without repeating it.
    #[must_use]
    pub fn current() -> Self {
        let thread = std::thread::current();
        Self::begin(thread.name().unwrap_or("unnamed"))
    }

    /// Test name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run configuration of the suite
    #[must_use]
    pub fn config(&self) -> &'static TestConfig {
        init_tracing()
    }

    /// Build the test's starting value and keep this guard alive with it
    #[must_use]
    pub fn fixture<T>(self, setup: impl FnOnce() -> T) -> Fixture<T> {
        Fixture {
            value: setup(),
            case: self,
        }
    }
}

impl Drop for TestCase {
    fn drop(&mut self) {
        let elapsed_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if std::thread::panicking() {
            tracing::warn!(test = %self.name, elapsed_ms, "Finalizing failed test method");
        } else {
            tracing::info!(test = %self.name, elapsed_ms, "Finalizing test method");
        }
    }
}

/// A test's starting value together with its [`TestCase`] guard
#[derive(Debug)]
pub struct Fixture<T> {
    value: T,
    case: TestCase,
}

impl<T> Fixture<T> {
    /// The guard this fixture belongs to
    #[must_use]
    pub const fn case(&self) -> &TestCase {
        &self.case
    }

    /// Replace the value, as a test does when it needs a different start
    pub fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }
}

impl<T> Deref for Fixture<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Fixture<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// Position of one run within a repeated test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition {
    /// One-based index of this run
    pub current: u32,
    /// Total number of runs
    pub total: u32,
}

impl Repetition {
    /// Describe run `current` of `total`
    #[must_use]
    pub const fn new(current: u32, total: u32) -> Self {
        Self { current, total }
    }

    /// Every repetition of a test run `total` times
    pub fn all(total: u32) -> impl Iterator<Item = Self> {
        (1..=total).map(move |current| Self::new(current, total))
    }

    /// Checks if this is the final run
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current == self.total
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Repetition number {} of {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let first: *const TestConfig = init_tracing();
        let second: *const TestConfig = init_tracing();
        assert_eq!(first, second);
    }

    #[test]
    fn test_second_subscriber_install_is_refused() {
        init_tracing();
        assert!(!install_subscriber(EnvFilter::new("info")));
    }

    #[test]
    fn test_fixture_derefs_to_value() {
        let mut fixture = TestCase::begin("fixture").fixture(|| vec![1, 2]);
        fixture.push(3);

        assert_eq!(*fixture, [1, 2, 3]);
        assert_eq!(fixture.case().name(), "fixture");
        assert!(!TestCase::current().name().is_empty());
        assert_eq!(fixture.replace(Vec::new()), [1, 2, 3]);
        assert!(fixture.is_empty());
    }

    #[test]
    fn test_repetition_display() {
        let runs: Vec<_> = Repetition::all(5).collect();
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[2].to_string(), "Repetition number 3 of 5");
        assert!(runs[4].is_last());
        assert!(!runs[0].is_last());
    }
}
