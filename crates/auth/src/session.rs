//! Explicit authentication session handed to the networking layer.

use crate::CurrentUser;

/// Bearer token plus the user it was issued to.
///
/// Callers build one of these at the edge (browser storage, CLI flags,
/// environment) and pass it down; nothing below reads credentials ambiently.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<CurrentUser>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: CurrentUser) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// A session with nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            user: None,
        }
    }

    /// Build from parts that may each be missing. Blank tokens count as
    /// missing.
    pub fn from_parts(token: Option<String>, user: Option<CurrentUser>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            user,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}
