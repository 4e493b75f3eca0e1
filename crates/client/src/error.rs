use thiserror::Error;

/// Failure talking to the jobs API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. `message` is the body's
    /// `message` field when the body was JSON and carried one.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// A 2xx response whose body did not decode.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Not found (404) or forbidden (403): the record cannot be edited from
    /// here, so the page should send the user back to the listing.
    pub fn redirects_to_listing(&self) -> bool {
        matches!(self.status(), Some(404) | Some(403))
    }

    /// Single-line text for the user: the server's message or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_not_found_and_forbidden_redirect() {
        let status = |status| ApiError::Status {
            status,
            message: None,
        };
        assert!(status(404).redirects_to_listing());
        assert!(status(403).redirects_to_listing());
        assert!(!status(401).redirects_to_listing());
        assert!(!status(500).redirects_to_listing());
        assert!(!ApiError::Network("refused".into()).redirects_to_listing());
    }

    #[test]
    fn user_message_prefers_the_server() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Deadline is in the past".into()),
        };
        assert_eq!(err.user_message("Failed to update job"), "Deadline is in the past");

        let blank = ApiError::Status {
            status: 400,
            message: Some("  ".into()),
        };
        assert_eq!(blank.user_message("Failed to update job"), "Failed to update job");

        let offline = ApiError::Network("connection refused".into());
        assert_eq!(offline.user_message("Failed to fetch job details"), "Failed to fetch job details");
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::Status {
            status: 404,
            message: Some("Job not found".into()),
        };
        assert_eq!(err.to_string(), "API error (404): Job not found");
    }
}
