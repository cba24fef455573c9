//! Business logic components
//!
//! Contains the [`ledger::AccountLedger`], the authorization-gated account
//! registry at the heart of the crate.

pub mod ledger;

pub use ledger::{AccountLedger, PERM_ACCOUNT_CREATE, ROLE_SUPERVISOR};
