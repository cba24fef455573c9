//! Authorization primitives consumed by the ledger
//!
//! Identity resolution and policy storage live outside this crate; here we
//! only model what an authenticated caller carries (name, roles,
//! permissions) and the checks the ledger performs against it.

pub mod permissions;
pub mod roles;
pub mod subject;

pub use permissions::Permission;
pub use roles::Role;
pub use subject::{Identity, Subject};
