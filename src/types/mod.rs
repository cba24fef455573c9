//! Core data types for the bank ledger
//!
//! This module contains the fundamental types used throughout the system:
//! accounts, transaction log entries, identifiers, and errors.

pub mod account;
pub mod error;
pub mod transaction;

pub use account::Account;
pub use error::BankError;
pub use transaction::{AccountId, Transaction, TransactionKind};
