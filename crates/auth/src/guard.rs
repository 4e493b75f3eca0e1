//! Recruiter-only page gating.
//!
//! This decides what the UI shows; it is not an authorization boundary. The
//! API enforces who may edit what.

use thiserror::Error;

use crate::{CurrentUser, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    #[error("not signed in")]
    NotAuthenticated,

    #[error("role '{0}' may not edit jobs")]
    WrongRole(Role),
}

/// Let the page render only for a signed-in recruiter.
///
/// - No IO
/// - No panics
pub fn require_recruiter(user: Option<&CurrentUser>) -> Result<&CurrentUser, AccessDenied> {
    let user = user.ok_or(AccessDenied::NotAuthenticated)?;
    if user.role.is_recruiter() {
        Ok(user)
    } else {
        tracing::debug!(user_id = %user.id, role = %user.role, "edit page denied");
        Err(AccessDenied::WrongRole(user.role.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recruiter_passes() {
        let user = CurrentUser::new("u1", Role::new("recruiter"));
        assert_eq!(require_recruiter(Some(&user)), Ok(&user));
    }

    #[test]
    fn missing_user_is_denied() {
        assert_eq!(require_recruiter(None), Err(AccessDenied::NotAuthenticated));
    }

    #[test]
    fn other_roles_are_denied() {
        let user = CurrentUser::new("u2", Role::new("freelancer"));
        assert_eq!(
            require_recruiter(Some(&user)),
            Err(AccessDenied::WrongRole(Role::new("freelancer")))
        );
    }

    #[test]
    fn role_match_is_exact() {
        let user = CurrentUser::new("u3", Role::new("Recruiter"));
        assert!(require_recruiter(Some(&user)).is_err());
    }

    #[test]
    fn role_deserializes_from_a_plain_string() {
        let user: CurrentUser =
            serde_json::from_str(r#"{"id":"u4","role":"recruiter","name":"Asha"}"#).unwrap();
        assert!(require_recruiter(Some(&user)).is_ok());
        assert_eq!(user.name.as_deref(), Some("Asha"));
    }
}
