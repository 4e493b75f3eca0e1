//! Editor settings.

use std::time::Duration;

/// Environment variable overriding the redirect delay, in milliseconds.
pub const REDIRECT_DELAY_ENV: &str = "JOBBOARD_REDIRECT_DELAY_MS";

/// Delay before leaving the page after a success or a 404/403 load.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub redirect_delay: Duration,
}

impl EditorConfig {
    /// Read [`REDIRECT_DELAY_ENV`]; unset or unparsable values keep the
    /// default.
    pub fn from_env() -> Self {
        let redirect_delay = std::env::var(REDIRECT_DELAY_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REDIRECT_DELAY);
        Self { redirect_delay }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }
}
