//! Shared test data.

use std::str::FromStr;
use testbed_banking::{Account, Money};
use testbed_exams::Exam;

/// Holder of [`default_account`]
pub const DEFAULT_HOLDER: &str = "Cesar";

/// Balance of [`default_account`]
pub const DEFAULT_BALANCE: &str = "1000.12345";

/// Parses a literal amount.
///
/// # Panics
///
/// Panics if `amount` is not a decimal literal; fixtures are written by hand.
#[must_use]
#[track_caller]
#[allow(clippy::expect_used)]
pub fn money(amount: &str) -> Money {
    Money::from_str(amount).expect("fixture amount should be a decimal literal")
}

/// The account most account tests start from: Cesar with 1000.12345
#[must_use]
pub fn default_account() -> Account {
    Account::new(DEFAULT_HOLDER, money(DEFAULT_BALANCE))
}

/// Math (5), Languages (6) and History (7)
#[must_use]
pub fn exams() -> Vec<Exam> {
    vec![
        Exam::new(5, "Math"),
        Exam::new(6, "Languages"),
        Exam::new(7, "History"),
    ]
}

/// The four questions of the Math exam
#[must_use]
pub fn questions() -> Vec<String> {
    ["arithmetic", "calculus", "trigonometry", "geometry"]
        .into_iter()
        .map(String::from)
        .collect()
}
