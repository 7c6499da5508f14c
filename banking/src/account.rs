//! Bank account with a guarded debit and an unguarded credit.

use crate::error::{BankingError, Result};
use crate::types::{AccountId, BankId, Money};
use serde::{Deserialize, Serialize};

/// A single bank account.
///
/// Two accounts are equal when they have the same holder and the same
/// balance written with the same scale (`100` and `100.00` differ); the id
/// and the owning bank are not part of equality.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    holder: String,
    balance: Money,
    bank: Option<BankId>,
}

impl Account {
    /// Creates an account that does not belong to any bank yet
    #[must_use]
    pub fn new(holder: impl Into<String>, balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            holder: holder.into(),
            balance,
            bank: None,
        }
    }

    /// Account identifier
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Account holder name
    #[must_use]
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Renames the account holder
    pub fn set_holder(&mut self, holder: impl Into<String>) {
        self.holder = holder.into();
    }

    /// Current balance
    #[must_use]
    pub const fn balance(&self) -> &Money {
        &self.balance
    }

    /// Overwrites the balance without any check
    pub fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    /// The bank this account was added to, if any
    #[must_use]
    pub const fn bank_id(&self) -> Option<BankId> {
        self.bank
    }

    pub(crate) fn attach_to(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Takes `amount` out of the account.
    ///
    /// # Errors
    ///
    /// Returns [`BankingError::InsufficientFunds`] if the balance would go
    /// negative; the balance is left untouched in that case.
    pub fn debit(&mut self, amount: &Money) -> Result<()> {
        let new_balance = &self.balance - amount;

        if new_balance.is_negative() {
            tracing::warn!(
                account = %self.id,
                balance = %self.balance,
                requested = %amount,
                "Debit rejected"
            );
            return Err(BankingError::InsufficientFunds);
        }

        tracing::debug!(account = %self.id, %amount, balance = %new_balance, "Debit applied");
        self.balance = new_balance;
        Ok(())
    }

    /// Puts `amount` into the account. Credits are not guarded.
    pub fn credit(&mut self, amount: &Money) {
        self.balance = &self.balance + amount;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "Credit applied");
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.holder == other.holder
            && self.balance == other.balance
            && self.balance.scale() == other.balance.scale()
    }
}

impl Eq for Account {}
