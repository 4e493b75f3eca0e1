//! reqwest implementation of [`JobsApi`].

use async_trait::async_trait;
use serde::Deserialize;

use jobboard_auth::Session;
use jobboard_core::{JobId, JobRecord, JobUpdate};

use crate::{ApiError, ClientConfig, JobsApi};

/// HTTP client for the jobs API.
///
/// Holds no credentials: every call takes the caller's [`Session`].
#[derive(Debug, Clone)]
pub struct JobsClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape used by the API (`{"message": "..."}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl JobsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    /// Reuse an existing connection pool.
    pub fn with_http(http: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http,
            base_url: config.base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn job_url(&self, id: &JobId) -> String {
        format!("{}/jobs/{}", self.base_url, id)
    }

    fn authorized(&self, req: reqwest::RequestBuilder, session: &Session) -> reqwest::RequestBuilder {
        match session.token() {
            Some(token) => req.bearer_auth(token),
            None => {
                tracing::warn!("sending jobs API request without a bearer token");
                req
            }
        }
    }

    /// Turn a non-2xx response into [`ApiError::Status`], keeping the body's
    /// `message` when there is one.
    async fn status_error(resp: reqwest::Response) -> ApiError {
        let status = resp.status().as_u16();
        let body = resp.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        ApiError::Status { status, message }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl JobsApi for JobsClient {
    async fn fetch_job(&self, session: &Session, id: &JobId) -> Result<JobRecord, ApiError> {
        let url = self.job_url(id);
        tracing::debug!(%url, "fetching job");

        let resp = self.authorized(self.http.get(&url), session).send().await?;
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_job(
        &self,
        session: &Session,
        id: &JobId,
        update: &JobUpdate,
    ) -> Result<(), ApiError> {
        let url = self.job_url(id);
        tracing::debug!(%url, "updating job");

        // `.json()` also sets `Content-Type: application/json`.
        let resp = self
            .authorized(self.http.patch(&url), session)
            .json(update)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        Ok(())
    }
}
