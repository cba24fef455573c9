use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A named permission granted to a subject.
///
/// Permission strings use a `resource:action` convention (the ledger's own
/// gate is `account:create`), but the ledger treats them as opaque and
/// matches them literally. The one exception is `"*"`, which a policy
/// layer can grant to mean "everything" without enumerating the domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.as_str() == "*"
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
