//! Error types for the bank ledger
//!
//! This module defines all error conditions an operation can report.
//! Every error is surfaced synchronously to the caller; nothing is retried
//! internally and a failed operation leaves the account untouched (no
//! transaction record, no balance change).
//!
//! # Error Categories
//!
//! - **Authorization**: the caller lacks the role, permission, or ownership
//!   an operation requires.
//! - **Account state**: mutating a closed account, or referencing an
//!   account id the ledger has never issued.
//! - **Validation**: withdrawals exceeding the balance, non-positive
//!   amounts.

use super::transaction::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for ledger operations
///
/// Each variant carries enough context to diagnose the failure without
/// access to the ledger itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// The caller lacks a required role, permission, or ownership
    ///
    /// Raised before any state is touched; denial has no side effects.
    #[error("subject '{subject}' is not authorized: missing {requirement}")]
    Unauthorized {
        /// Name of the denied subject
        subject: String,
        /// What the subject was missing (e.g. "role 'supervisor'")
        requirement: String,
    },

    /// A mutating operation was attempted on a closed account
    #[error("account {id} is closed")]
    InactiveAccount {
        /// The closed account's id
        id: AccountId,
    },

    /// A withdrawal exceeded the account's balance
    #[error("not enough funds in account {id}: balance {balance}, requested {requested}")]
    NotEnoughFunds {
        /// The account's id
        id: AccountId,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The account id is unknown to the ledger
    #[error("account {id} not found")]
    AccountNotFound {
        /// The id that was looked up
        id: AccountId,
    },

    /// A deposit or withdrawal amount was zero or negative
    #[error("invalid amount {amount}: deposits and withdrawals must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// A balance update would overflow
    ///
    /// The operation is rejected to keep the account intact.
    #[error("arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// The account's id
        id: AccountId,
        /// Operation that would overflow
        operation: String,
    },

    /// A balance update would underflow
    ///
    /// The operation is rejected to keep the account intact.
    #[error("arithmetic underflow in {operation} for account {id}")]
    ArithmeticUnderflow {
        /// The account's id
        id: AccountId,
        /// Operation that would underflow
        operation: String,
    },
}

// Helper functions for creating common errors

impl BankError {
    /// Create an Unauthorized error
    pub fn unauthorized(subject: &str, requirement: impl Into<String>) -> Self {
        BankError::Unauthorized {
            subject: subject.to_string(),
            requirement: requirement.into(),
        }
    }

    /// Create an InactiveAccount error
    pub fn inactive_account(id: AccountId) -> Self {
        BankError::InactiveAccount { id }
    }

    /// Create a NotEnoughFunds error
    pub fn not_enough_funds(id: AccountId, balance: Decimal, requested: Decimal) -> Self {
        BankError::NotEnoughFunds {
            id,
            balance,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: AccountId) -> Self {
        BankError::AccountNotFound { id }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(id: AccountId, operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            id,
            operation: operation.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(id: AccountId, operation: &str) -> Self {
        BankError::ArithmeticUnderflow {
            id,
            operation: operation.to_string(),
        }
    }
}
