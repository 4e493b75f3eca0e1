//! `jobboard-client`: typed access to the jobs REST API.
//!
//! Credentials are never read ambiently: every request takes an explicit
//! [`jobboard_auth::Session`].

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::JobsApi;
pub use config::{API_URL_ENV, ClientConfig, DEFAULT_API_URL};
pub use error::ApiError;
pub use http::JobsClient;
