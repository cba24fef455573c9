use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A named role granted to a subject.
///
/// The ledger only ever compares role names; it neither defines the role
/// catalog nor decides who gets which role. Both belong to the external
/// security provider, so the type stays an opaque string wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
