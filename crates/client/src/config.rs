//! Client configuration loaded from the environment.

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "JOBBOARD_API_URL";

/// Base URL used when [`API_URL_ENV`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:5000/api`. Job routes hang off
    /// `{base_url}/jobs`.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read [`API_URL_ENV`], falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                tracing::debug!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
                Self::default()
            }
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        assert_eq!(
            ClientConfig::new("http://api.local/v1//").base_url,
            "http://api.local/v1"
        );
    }

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_API_URL);
    }
}
