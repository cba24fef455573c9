//! Authenticated subjects and the identity contract
//!
//! The ledger never resolves identity itself; callers establish a subject
//! with the external security provider and pass it into every operation.
//! [`Identity`] is the capability set the ledger consumes: a name plus
//! role and permission checks. [`Subject`] is a plain in-memory
//! implementation suitable for embedding and for tests.

use crate::types::BankError;

use super::{Permission, Role};

/// Capability set the ledger requires from an authenticated caller.
///
/// The failing forms `check_role` / `check_permission` return
/// [`BankError::Unauthorized`] on denial, so call sites can gate a mutation
/// with a single `?`.
pub trait Identity {
    /// The subject's established name
    fn name(&self) -> &str;

    /// Whether the subject holds the named role
    fn has_role(&self, role: &str) -> bool;

    /// Whether the subject holds the named permission
    fn is_permitted(&self, permission: &str) -> bool;

    /// Require a role, failing with `Unauthorized` if absent
    fn check_role(&self, role: &str) -> Result<(), BankError> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(BankError::unauthorized(
                self.name(),
                format!("role '{role}'"),
            ))
        }
    }

    /// Require a permission, failing with `Unauthorized` if absent
    fn check_permission(&self, permission: &str) -> Result<(), BankError> {
        if self.is_permitted(permission) {
            Ok(())
        } else {
            Err(BankError::unauthorized(
                self.name(),
                format!("permission '{permission}'"),
            ))
        }
    }
}

/// An authenticated caller with granted roles and permissions.
///
/// Construction is decoupled from storage and transport: an API layer can
/// derive a `Subject` from claims and a policy source and hand it to the
/// ledger per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    roles: Vec<Role>,
    permissions: Vec<Permission>,
}

impl Subject {
    /// Create a subject with no roles or permissions
    pub fn new(name: impl Into<String>) -> Self {
        Subject {
            name: name.into(),
            roles: Vec::new(),
            permissions: Vec::new(),
        }
    }

    /// Grant a role
    pub fn with_role(mut self, role: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        self.roles.push(Role::new(role));
        self
    }

    /// Grant a permission (`"*"` grants everything)
    pub fn with_permission(mut self, permission: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        self.permissions.push(Permission::new(permission));
        self
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }
}

impl Identity for Subject {
    fn name(&self) -> &str {
        &self.name
    }

    fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }

    fn is_permitted(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p.is_wildcard() || p.as_str() == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_without_grants_has_nothing() {
        let subject = Subject::new("dan");
        assert_eq!(subject.name(), "dan");
        assert!(!subject.has_role("supervisor"));
        assert!(!subject.is_permitted("account:create"));
    }

    #[test]
    fn test_granted_role_and_permission_are_visible() {
        let subject = Subject::new("sally")
            .with_role("supervisor")
            .with_permission("account:create");

        assert!(subject.has_role("supervisor"));
        assert!(!subject.has_role("auditor"));
        assert!(subject.is_permitted("account:create"));
        assert!(!subject.is_permitted("account:close"));
    }

    #[test]
    fn test_wildcard_permission_grants_everything() {
        let subject = Subject::new("admin").with_permission("*");
        assert!(subject.is_permitted("account:create"));
        assert!(subject.is_permitted("anything:else"));
    }

    #[test]
    fn test_check_role_denial_reports_requirement() {
        let subject = Subject::new("dan");
        let err = subject.check_role("supervisor").unwrap_err();
        assert_eq!(
            err,
            BankError::unauthorized("dan", "role 'supervisor'")
        );
    }

    #[test]
    fn test_check_permission_passes_when_granted() {
        let subject = Subject::new("dan").with_permission("account:create");
        assert!(subject.check_permission("account:create").is_ok());
        assert!(subject.check_permission("account:audit").is_err());
    }
}
