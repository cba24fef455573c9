//! The account ledger
//!
//! This module provides the `AccountLedger`: an in-memory registry of bank
//! accounts supporting create, deposit, withdraw, close, and read-back
//! operations, each gated by an explicit authorization check against the
//! calling subject.
//!
//! The ledger enforces:
//! - Authorization before mutation (a denied call has no side effects)
//! - Per-account serialization of balance updates
//! - Append-only transaction logging for every successful money movement
//!
//! Accounts are shared state: the ledger can be used concurrently from
//! multiple threads through a shared reference. Each mutation holds the
//! account's map entry exclusively for its whole read-modify-write, so
//! concurrent operations on the same account never lose updates.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::auth::Identity;
use crate::types::{Account, AccountId, BankError, Transaction, TransactionKind};

/// Permission required to open a new account
pub const PERM_ACCOUNT_CREATE: &str = "account:create";

/// Role required to close an account
pub const ROLE_SUPERVISOR: &str = "supervisor";

/// In-memory registry of bank accounts
///
/// Every operation takes the calling subject explicitly; the ledger holds
/// no ambient security state. Money movement (deposit/withdraw) is
/// restricted to the account's owner, closing to subjects holding the
/// supervisor role, and creation to subjects holding the
/// `account:create` permission. Read accessors require only an
/// authenticated subject.
pub struct AccountLedger {
    /// Map of account ids to account state
    accounts: DashMap<AccountId, Account>,

    /// Source of unique account ids
    next_id: AtomicU64,
}

impl AccountLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        AccountLedger {
            accounts: DashMap::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Open a new account for the named owner
    ///
    /// Requires the `account:create` permission. The account starts active
    /// with a zero balance and an empty transaction log.
    ///
    /// # Returns
    ///
    /// The freshly assigned unique account id
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if the subject lacks the creation permission.
    pub fn create_account(
        &self,
        subject: &impl Identity,
        owner: &str,
    ) -> Result<AccountId, BankError> {
        subject.check_permission(PERM_ACCOUNT_CREATE)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.accounts.insert(id, Account::new(id, owner));

        info!(subject = subject.name(), owner, id, "account created");
        Ok(id)
    }

    /// Deposit funds into an account
    ///
    /// Only the account's owner may deposit. Appends a deposit record and
    /// returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account id is unknown (`AccountNotFound`)
    /// - The subject is not the account's owner (`Unauthorized`)
    /// - The account has been closed (`InactiveAccount`)
    /// - The amount is zero or negative (`InvalidAmount`)
    /// - The balance would overflow (`ArithmeticOverflow`)
    pub fn deposit(
        &self,
        subject: &impl Identity,
        id: AccountId,
        amount: Decimal,
    ) -> Result<Decimal, BankError> {
        let mut account = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| BankError::account_not_found(id))?;

        Self::check_owner(subject, &account)?;
        Self::check_active(&account)?;
        Self::check_amount(amount)?;

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow(id, "deposit"))?;
        account
            .transactions
            .push(Transaction::new(TransactionKind::Deposit, amount));

        debug!(
            subject = subject.name(),
            id,
            %amount,
            balance = %account.balance,
            "deposit"
        );
        Ok(account.balance)
    }

    /// Withdraw funds from an account
    ///
    /// Only the account's owner may withdraw, and only up to the current
    /// balance. Appends a withdrawal record and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account id is unknown (`AccountNotFound`)
    /// - The subject is not the account's owner (`Unauthorized`)
    /// - The account has been closed (`InactiveAccount`)
    /// - The amount is zero or negative (`InvalidAmount`)
    /// - The amount exceeds the balance (`NotEnoughFunds`)
    /// - The balance would underflow (`ArithmeticUnderflow`)
    pub fn withdraw(
        &self,
        subject: &impl Identity,
        id: AccountId,
        amount: Decimal,
    ) -> Result<Decimal, BankError> {
        let mut account = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| BankError::account_not_found(id))?;

        Self::check_owner(subject, &account)?;
        Self::check_active(&account)?;
        Self::check_amount(amount)?;

        if amount > account.balance {
            return Err(BankError::not_enough_funds(id, account.balance, amount));
        }

        account.balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_underflow(id, "withdrawal"))?;
        account
            .transactions
            .push(Transaction::new(TransactionKind::Withdrawal, amount));

        debug!(
            subject = subject.name(),
            id,
            %amount,
            balance = %account.balance,
            "withdrawal"
        );
        Ok(account.balance)
    }

    /// Close an account and pay out its balance
    ///
    /// Requires the supervisor role; ownership does not matter. Sets the
    /// account inactive, zeroes the balance, and appends a closure record
    /// carrying the paid-out amount.
    ///
    /// # Returns
    ///
    /// The balance held immediately before closing
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The subject lacks the supervisor role (`Unauthorized`)
    /// - The account id is unknown (`AccountNotFound`)
    /// - The account is already closed (`InactiveAccount`)
    pub fn close_account(
        &self,
        subject: &impl Identity,
        id: AccountId,
    ) -> Result<Decimal, BankError> {
        subject.check_role(ROLE_SUPERVISOR)?;

        let mut account = self
            .accounts
            .get_mut(&id)
            .ok_or_else(|| BankError::account_not_found(id))?;

        Self::check_active(&account)?;

        let closing_balance = account.balance;
        account.balance = Decimal::ZERO;
        account.active = false;
        account
            .transactions
            .push(Transaction::new(TransactionKind::Closure, closing_balance));

        info!(
            subject = subject.name(),
            id,
            %closing_balance,
            "account closed"
        );
        Ok(closing_balance)
    }

    /// Get the owner name of an account
    pub fn owner_of(&self, subject: &impl Identity, id: AccountId) -> Result<String, BankError> {
        let account = self.lookup(subject, id)?;
        Ok(account.owner.clone())
    }

    /// Check whether an account is still open
    pub fn is_account_active(
        &self,
        subject: &impl Identity,
        id: AccountId,
    ) -> Result<bool, BankError> {
        let account = self.lookup(subject, id)?;
        Ok(account.active)
    }

    /// Get the current balance of an account
    pub fn balance_of(&self, subject: &impl Identity, id: AccountId) -> Result<Decimal, BankError> {
        let account = self.lookup(subject, id)?;
        Ok(account.balance)
    }

    /// Get a snapshot of an account's transaction log
    pub fn tx_history(
        &self,
        subject: &impl Identity,
        id: AccountId,
    ) -> Result<Vec<Transaction>, BankError> {
        let account = self.lookup(subject, id)?;
        Ok(account.transactions.clone())
    }

    /// Number of accounts the ledger has issued (open and closed)
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn lookup(
        &self,
        subject: &impl Identity,
        id: AccountId,
    ) -> Result<dashmap::mapref::one::Ref<'_, AccountId, Account>, BankError> {
        debug!(subject = subject.name(), id, "account lookup");
        self.accounts
            .get(&id)
            .ok_or_else(|| BankError::account_not_found(id))
    }

    fn check_owner(subject: &impl Identity, account: &Account) -> Result<(), BankError> {
        if subject.name() == account.owner {
            Ok(())
        } else {
            Err(BankError::unauthorized(
                subject.name(),
                format!("ownership of account {}", account.id),
            ))
        }
    }

    fn check_active(account: &Account) -> Result<(), BankError> {
        if account.active {
            Ok(())
        } else {
            Err(BankError::inactive_account(account.id))
        }
    }

    fn check_amount(amount: Decimal) -> Result<(), BankError> {
        if amount > Decimal::ZERO {
            Ok(())
        } else {
            Err(BankError::invalid_amount(amount))
        }
    }
}

impl Default for AccountLedger {
    fn default() -> Self {
        Self::new()
    }
}
