//! Test run configuration
//!
//! Reads the profile the suite runs under and a few knobs from the
//! environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TESTBED_PROFILE` | `dev` | `dev`, `qa` or `ci` |
//! | `TESTBED_LOG` | per profile | `tracing` filter for test output |
//! | `TESTBED_DATA_DIR` | unset | Directory holding CSV parameter files |
//!
//! # Example
//!
//! ```
//! use testbed_testing::config::{Profile, TestConfig};
//!
//! let config = TestConfig::from_lookup(|key| match key {
//!     "TESTBED_PROFILE" => Some("qa".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//!
//! assert_eq!(config.profile, Profile::Qa);
//! assert_eq!(config.log_filter, "info");
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable selecting the profile
pub const PROFILE_VAR: &str = "TESTBED_PROFILE";

/// Environment variable overriding the log filter
pub const LOG_VAR: &str = "TESTBED_LOG";

/// Environment variable pointing at parameter files
pub const DATA_DIR_VAR: &str = "TESTBED_DATA_DIR";

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown profile name
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// A run condition pattern is not a valid regular expression
    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// A toolchain condition names a version that does not parse
    #[error("Invalid version {version:?}: {reason}")]
    InvalidVersion {
        /// The offending version text
        version: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Profile a test run executes under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Local development
    #[default]
    Dev,
    /// Quality assurance runs
    Qa,
    /// Continuous integration
    Ci,
}

impl Profile {
    /// Get profile from string
    ///
    /// # Errors
    ///
    /// Returns error if profile string is invalid
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Dev),
            "qa" => Ok(Self::Qa),
            "ci" => Ok(Self::Ci),
            _ => Err(ConfigError::InvalidProfile(s.to_string())),
        }
    }

    /// Default log filter for this profile
    #[must_use]
    pub const fn default_log_filter(self) -> &'static str {
        match self {
            Self::Dev => "debug",
            Self::Qa => "info",
            Self::Ci => "warn",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Qa => write!(f, "qa"),
            Self::Ci => write!(f, "ci"),
        }
    }
}

/// Test run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    /// Active profile
    pub profile: Profile,
    /// `tracing` filter directive
    pub log_filter: String,
    /// Directory holding parameter files, if overridden
    pub data_dir: Option<PathBuf>,
}

impl TestConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if the profile is unknown or the result is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns error if the profile is unknown or the result is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup(PROFILE_VAR)
            .map_or(Ok(Profile::default()), |value| Profile::from_str(&value))?;

        let config = Self {
            profile,
            log_filter: lookup(LOG_VAR)
                .unwrap_or_else(|| profile.default_log_filter().to_string()),
            data_dir: lookup(DATA_DIR_VAR).map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if the log filter is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "log filter cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve a parameter file: `data_dir/name` when a data directory is
    /// configured, `default_dir/name` otherwise
    #[must_use]
    pub fn data_file(&self, default_dir: impl Into<PathBuf>, name: &str) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| default_dir.into())
            .join(name)
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            profile: Profile::Dev,
            log_filter: Profile::Dev.default_log_filter().to_string(),
            data_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(Profile::from_str("dev").unwrap(), Profile::Dev);
        assert_eq!(Profile::from_str("QA").unwrap(), Profile::Qa);
        assert_eq!(Profile::from_str("ci").unwrap(), Profile::Ci);
        assert!(matches!(
            Profile::from_str("prod"),
            Err(ConfigError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_profile_display() {
        assert_eq!(Profile::Dev.to_string(), "dev");
        assert_eq!(Profile::Qa.to_string(), "qa");
        assert_eq!(Profile::Ci.to_string(), "ci");
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = TestConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = TestConfig::from_lookup(lookup(&[
            (PROFILE_VAR, "ci"),
            (LOG_VAR, "testbed_banking=trace"),
            (DATA_DIR_VAR, "/tmp/params"),
        ]))
        .unwrap();

        assert_eq!(config.profile, Profile::Ci);
        assert_eq!(config.log_filter, "testbed_banking=trace");
        assert_eq!(
            config.data_file("tests/data", "amounts.csv"),
            PathBuf::from("/tmp/params/amounts.csv")
        );
    }

    #[test]
    fn test_data_file_falls_back_to_default_dir() {
        let config = TestConfig::default();
        assert_eq!(
            config.data_file("tests/data", "amounts.csv"),
            PathBuf::from("tests/data/amounts.csv")
        );
    }

    #[test]
    fn test_empty_log_filter_rejected() {
        let err = TestConfig::from_lookup(lookup(&[(LOG_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
