//! Errors raised by account and bank operations.

use crate::types::AccountId;
use thiserror::Error;

/// Errors that can occur when moving money.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankingError {
    /// A debit would take the balance below zero.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// The bank holds no account with this id.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Source and destination of a transfer are the same account.
    #[error("Cannot transfer to the same account")]
    SameAccount,

    /// Text that does not parse as an amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Result alias for banking operations.
pub type Result<T> = std::result::Result<T, BankingError>;
