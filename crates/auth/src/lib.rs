//! `jobboard-auth`: who is signed in, and whether they may open the editor.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod guard;
pub mod principal;
pub mod roles;
pub mod session;

pub use guard::{AccessDenied, require_recruiter};
pub use principal::CurrentUser;
pub use roles::Role;
pub use session::Session;
