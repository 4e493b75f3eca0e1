use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier carried by the authenticated user.
///
/// Roles are opaque strings issued by the identity provider; the client only
/// ever compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// The role allowed to edit job postings.
    pub const RECRUITER: Role = Role(Cow::Borrowed("recruiter"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_recruiter(&self) -> bool {
        self.as_str() == Self::RECRUITER.as_str()
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
