//! Account state for the bank ledger
//!
//! This module defines the Account structure tracking a single customer
//! account: its owner, balance, active flag, and transaction log.

use super::transaction::{AccountId, Transaction};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single bank account
///
/// Accounts are created active with a zero balance and an empty transaction
/// log. Closing an account zeroes the balance and clears the active flag;
/// the account itself is never removed and stays queryable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique ledger-assigned identifier
    pub id: AccountId,

    /// Name of the account's owner, fixed at creation
    ///
    /// Money movement (deposit/withdraw) is restricted to the subject whose
    /// name matches this field.
    pub owner: String,

    /// Current balance; never negative
    pub balance: Decimal,

    /// Whether the account is open for business
    ///
    /// Set to false by closure; the transition is irreversible.
    pub active: bool,

    /// Append-only log of deposits, withdrawals, and the closure event
    pub transactions: Vec<Transaction>,

    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new active account with zero balance and an empty log
    pub fn new(id: AccountId, owner: impl Into<String>) -> Self {
        Account {
            id,
            owner: owner.into(),
            balance: Decimal::ZERO,
            active: true,
            transactions: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
