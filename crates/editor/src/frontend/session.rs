//! Builds the [`Session`] from browser storage, once, at the app root.

use jobboard_auth::{CurrentUser, Session};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// `localStorage` key holding the signed-in user as JSON.
pub const USER_KEY: &str = "user";

pub fn load_session() -> Session {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        tracing::warn!("local storage unavailable; continuing signed out");
        return Session::anonymous();
    };

    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user = storage
        .get_item(USER_KEY)
        .ok()
        .flatten()
        .and_then(|raw| match serde_json::from_str::<CurrentUser>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "stored user is not readable");
                None
            }
        });

    Session::from_parts(token, user)
}
