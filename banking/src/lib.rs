//! Bank accounts with overdraft protection and transfers between accounts.
//!
//! - [`Account`]: holder, balance and the bank it belongs to. A debit that
//!   would leave a negative balance fails with
//!   [`BankingError::InsufficientFunds`] and changes nothing; a credit is
//!   not guarded.
//! - [`Bank`]: a named list of accounts that orchestrates transfers as a
//!   debit followed by a credit; only the debit can fail.
//! - [`Money`]: arbitrary-precision decimal amount, exact at any scale.
//!
//! # Quick Start
//!
//! ```
//! use testbed_banking::{Account, Bank, BankingError, Money};
//!
//! # fn main() -> Result<(), BankingError> {
//! let mut bank = Bank::new("BBVA");
//! let donor = bank.add_account(Account::new("Jhon Doe donor", "2500".parse()?));
//! let recipient = bank.add_account(Account::new("Cesar", "1500".parse()?));
//!
//! bank.transfer_between(donor, recipient, &Money::from_units(400))?;
//!
//! assert_eq!(bank.account(donor).map(|a| a.balance().to_string()), Some("2100".into()));
//! assert_eq!(
//!     bank.transfer_between(donor, recipient, &Money::from_units(10_000)),
//!     Err(BankingError::InsufficientFunds)
//! );
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod bank;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use account::Account;
pub use bank::Bank;
pub use error::BankingError;
pub use types::{AccountId, BankId, Money};
