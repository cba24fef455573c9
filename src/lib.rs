//! Bank Ledger Library
//! # Overview
//!
//! An in-memory bank account ledger with explicit, per-call authorization.
//!
//! # Architecture
//!
//! The system is organized into three components:
//!
//! - [`types`] - Core data types (Account, Transaction, BankError)
//! - [`auth`] - Authorization primitives (Role, Permission, Identity, Subject)
//! - [`core`] - Business logic:
//!   - [`core::ledger`] - The account registry and its gated operations
//!
//! # Authorization model
//!
//! The ledger owns no security state. Every call takes the authenticated
//! subject explicitly; identity resolution and policy storage belong to an
//! external provider. Per operation:
//!
//! - **Create**: any subject holding the `account:create` permission
//! - **Deposit / Withdraw**: the account's owner only
//! - **Close**: subjects holding the `supervisor` role only
//! - **Reads**: any authenticated subject
//!
//! Checks run before any mutation; a denied call leaves the account
//! untouched.
//!
//! # Account lifecycle
//!
//! Accounts are created active with a zero balance and an append-only
//! transaction log. Deposits and withdrawals (owner-only, positive amounts,
//! withdrawals up to the balance) each log one record. Closing pays out and
//! zeroes the balance, logs a closure record, and permanently deactivates
//! the account; closed accounts remain queryable forever.

// Module declarations
pub mod auth;
pub mod core;
pub mod types;

pub use crate::core::{AccountLedger, PERM_ACCOUNT_CREATE, ROLE_SUPERVISOR};
pub use auth::{Identity, Permission, Role, Subject};
pub use types::{Account, AccountId, BankError, Transaction, TransactionKind};
