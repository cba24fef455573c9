//! Transaction log types for the bank ledger
//!
//! Every successful money movement on an account appends exactly one
//! [`Transaction`] to the account's log. The log is append-only and is
//! never truncated, even after the account is closed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Assigned by the ledger at creation time, unique for the ledger's lifetime.
pub type AccountId = u64;

/// Kinds of transaction recorded in an account's log
///
/// Account creation is not logged as a transaction; the log covers money
/// movement and the final closure event only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Credit funds to the account
    Deposit,

    /// Debit funds from the account
    ///
    /// Requires sufficient balance to succeed.
    Withdrawal,

    /// Close the account
    ///
    /// The recorded amount is the balance that was returned to the owner
    /// when the account was closed.
    Closure,
}

/// A single entry in an account's transaction log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// What happened
    pub kind: TransactionKind,

    /// The amount moved (or, for closures, the balance paid out)
    pub amount: Decimal,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction record stamped with the current time
    pub fn new(kind: TransactionKind, amount: Decimal) -> Self {
        Transaction {
            kind,
            amount,
            created_at: Utc::now(),
        }
    }
}
