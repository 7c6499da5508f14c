//! Bank aggregate and money transfers.
//!
//! A transfer is a debit on the source followed by a credit on the
//! destination. Only the debit can fail, and it fails before anything has
//! moved; credits are exact and unbounded. A transfer therefore either
//! completes or leaves both balances as they were.
//!
//! ```text
//! transfer(source, destination, amount)
//!    │
//!    ├─► debit source ──── InsufficientFunds ──► stop, nothing changed
//!    │
//!    ├─► credit destination
//!    │
//!    └─► done
//! ```

use crate::account::Account;
use crate::error::{BankingError, Result};
use crate::types::{AccountId, BankId, Money};

/// A named bank owning a list of accounts
#[derive(Clone, Debug)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    /// Creates an empty bank
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BankId::new(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    /// Bank identifier, stamped on every account it owns
    #[must_use]
    pub const fn id(&self) -> BankId {
        self.id
    }

    /// Bank name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the bank
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Takes ownership of `account` and records this bank on it.
    ///
    /// Returns the id to look the account up again.
    pub fn add_account(&mut self, mut account: Account) -> AccountId {
        account.attach_to(self.id);
        let id = account.id();
        tracing::debug!(bank = %self.name, account = %id, holder = account.holder(), "Account added");
        self.accounts.push(account);
        id
    }

    /// Accounts in the order they were added
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of accounts
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Checks if the bank has no accounts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Returns an account by id
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id() == id)
    }

    /// Returns the first account held by `holder`
    #[must_use]
    pub fn account_by_holder(&self, holder: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.holder() == holder)
    }

    /// Moves `amount` from `source` to `destination`.
    ///
    /// The accounts do not have to belong to this bank.
    ///
    /// # Errors
    ///
    /// Returns [`BankingError::InsufficientFunds`] if the source cannot cover
    /// the amount. Both balances are unchanged on error.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: &Money,
    ) -> Result<()> {
        source.debit(amount)?;
        destination.credit(amount);

        tracing::debug!(
            bank = %self.name,
            source = %source.id(),
            destination = %destination.id(),
            %amount,
            "Transfer completed"
        );
        Ok(())
    }

    /// Moves `amount` between two accounts owned by this bank.
    ///
    /// # Errors
    ///
    /// Returns [`BankingError::SameAccount`] if `from == to`,
    /// [`BankingError::AccountNotFound`] for an unknown id, and otherwise the
    /// same errors as [`Bank::transfer`].
    pub fn transfer_between(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: &Money,
    ) -> Result<()> {
        if from == to {
            return Err(BankingError::SameAccount);
        }

        let source_idx = self.position(from)?;
        let destination_idx = self.position(to)?;

        let mut accounts = std::mem::take(&mut self.accounts);
        let outcome = {
            let (source, destination) = pair_mut(&mut accounts, source_idx, destination_idx);
            self.transfer(source, destination, amount)
        };
        self.accounts = accounts;
        outcome
    }

    fn position(&self, id: AccountId) -> Result<usize> {
        self.accounts
            .iter()
            .position(|a| a.id() == id)
            .ok_or(BankingError::AccountNotFound(id))
    }
}

/// Two distinct mutable elements of a slice. `a != b` is checked by the caller.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    if a < b {
        let (left, right) = items.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
