//! Run conditions and assumptions.
//!
//! Compile-time gating stays with `#[cfg(target_os = "...")]`. Anything
//! decided at run time goes through a [`Condition`], evaluated against the
//! [`Host`]: the operating system and the compiler release the tests were
//! built with.
//!
//! ```
//! use testbed_testing::conditions::{Condition, Os};
//! use testbed_testing::skip_unless;
//!
//! fn only_on_64_bit_linux() {
//!     skip_unless!(Condition::PointerWidth(64));
//!     skip_unless!(Condition::OsIs(Os::Linux));
//!     // test body
//! }
//! # only_on_64_bit_linux();
//! ```
//!
//! [`assume!`](crate::assume) aborts the rest of a test on a plain boolean,
//! [`assuming_that`] runs only a block of it.

use crate::config::{ConfigError, Profile, TestConfig};
use crate::lifecycle::init_tracing;
use regex::Regex;
use rustc_version::Version;
use std::fmt;

/// Compiler release recorded by the build script, `unknown` if it could not
/// be determined
pub const RUSTC_VERSION: &str = env!("TESTBED_RUSTC_VERSION");

/// Operating system families a test can be gated on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    /// Linux
    Linux,
    /// macOS
    MacOs,
    /// Windows
    Windows,
    /// Anything else
    Other,
}

impl Os {
    /// The operating system this binary runs on
    #[must_use]
    pub fn current() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "linux" => Self::Linux,
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
}

/// The machine and toolchain a [`Condition`] is evaluated against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    /// Operating system
    pub os: Os,
    /// Compiler release the tests were built with, if known
    pub rustc: Option<Version>,
}

impl Host {
    /// The running system and the compiler that built this crate
    #[must_use]
    pub fn current() -> Self {
        Self {
            os: Os::current(),
            rustc: Version::parse(RUSTC_VERSION).ok(),
        }
    }

    fn rustc_release(&self) -> Option<(u64, u64, u64)> {
        self.rustc.as_ref().map(|v| (v.major, v.minor, v.patch))
    }
}

/// Result of evaluating a [`Condition`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The test should run
    Enabled,
    /// The test should be skipped, with the reason
    Disabled(String),
}

impl Evaluation {
    /// Checks if the test should run
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// A run-time predicate deciding whether a test runs
#[derive(Debug, Clone)]
pub enum Condition {
    /// Runs only on this system
    OsIs(Os),
    /// Runs everywhere except this system
    OsIsNot(Os),
    /// Runs only when pointers are this many bits wide
    PointerWidth(u32),
    /// Runs only when the variable is set and fully matches the pattern
    EnvVarMatches {
        /// Variable name
        name: String,
        /// Anchored pattern
        pattern: Regex,
    },
    /// Runs only under the given profile
    ProfileIs(Profile),
    /// Runs only on this compiler release, any patch level
    RustRelease {
        /// Major version
        major: u64,
        /// Minor version
        minor: u64,
    },
    /// Runs only on this compiler version or a newer one; pre-release tags
    /// such as `-nightly` are ignored
    RustAtLeast(Version),
    /// Runs only when the inner condition does not hold
    Not(Box<Condition>),
}

impl Condition {
    /// Build a [`Condition::EnvVarMatches`]; the pattern must match the
    /// whole value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn env_var_matches(name: impl Into<String>, pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
            ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self::EnvVarMatches {
            name: name.into(),
            pattern,
        })
    }

    /// Build a [`Condition::RustAtLeast`] from text such as `"1.85.0"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidVersion`] if `version` is not a
    /// `major.minor.patch` version.
    pub fn rust_at_least(version: &str) -> Result<Self, ConfigError> {
        Version::parse(version)
            .map(Self::RustAtLeast)
            .map_err(|e| ConfigError::InvalidVersion {
                version: version.to_string(),
                reason: e.to_string(),
            })
    }

    /// Evaluate against the running process and the suite configuration
    #[must_use]
    pub fn evaluate(&self) -> Evaluation {
        self.evaluate_with(init_tracing(), &Host::current(), |name| std::env::var(name).ok())
    }

    /// Evaluate against explicit inputs
    #[must_use]
    pub fn evaluate_with<F>(&self, config: &TestConfig, host: &Host, lookup: F) -> Evaluation
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.holds(config, host, &lookup) {
            Evaluation::Enabled
        } else {
            Evaluation::Disabled(format!("condition not met: {self}"))
        }
    }

    fn holds(
        &self,
        config: &TestConfig,
        host: &Host,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> bool {
        match self {
            Self::OsIs(expected) => host.os == *expected,
            Self::OsIsNot(excluded) => host.os != *excluded,
            Self::PointerWidth(bits) => usize::BITS == *bits,
            Self::EnvVarMatches { name, pattern } => {
                lookup(name).is_some_and(|value| pattern.is_match(&value))
            }
            Self::ProfileIs(profile) => config.profile == *profile,
            Self::RustRelease { major, minor } => host
                .rustc_release()
                .is_some_and(|(ma, mi, _)| ma == *major && mi == *minor),
            Self::RustAtLeast(minimum) => host
                .rustc_release()
                .is_some_and(|release| release >= (minimum.major, minimum.minor, minimum.patch)),
            Self::Not(inner) => !inner.holds(config, host, lookup),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OsIs(os) => write!(f, "os is {os:?}"),
            Self::OsIsNot(os) => write!(f, "os is not {os:?}"),
            Self::PointerWidth(bits) => write!(f, "pointer width is {bits}"),
            Self::EnvVarMatches { name, pattern } => write!(f, "${name} matches {pattern}"),
            Self::ProfileIs(profile) => write!(f, "profile is {profile}"),
            Self::RustRelease { major, minor } => write!(f, "rustc is {major}.{minor}.x"),
            Self::RustAtLeast(minimum) => write!(f, "rustc is at least {minimum}"),
            Self::Not(inner) => write!(f, "not ({inner})"),
        }
    }
}

/// Run `block` only when `assumption` holds; the rest of the test runs
/// either way.
pub fn assuming_that(assumption: bool, block: impl FnOnce()) {
    if assumption {
        block();
    } else {
        tracing::info!("Assumption not met, block skipped");
    }
}

/// Log that the current test stops early. Used by [`assume!`](crate::assume)
/// and [`skip_unless!`](crate::skip_unless).
pub fn report_skipped(reason: &str) {
    init_tracing();
    tracing::info!(reason, "Test skipped");
}

/// Stop the current test unless `cond` is true.
///
/// The test counts as passed; the reason is logged.
#[macro_export]
macro_rules! assume {
    ($cond:expr $(,)?) => {
        $crate::assume!($cond, "assumption failed: {}", stringify!($cond))
    };
    ($cond:expr, $($reason:tt)+) => {
        if !$cond {
            $crate::conditions::report_skipped(&format!($($reason)+));
            return;
        }
    };
}

/// Stop the current test unless the [`Condition`] evaluates to enabled.
#[macro_export]
macro_rules! skip_unless {
    ($condition:expr $(,)?) => {
        if let $crate::conditions::Evaluation::Disabled(reason) = $condition.evaluate() {
            $crate::conditions::report_skipped(&reason);
            return;
        }
    };
}
