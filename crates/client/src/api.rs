//! The jobs endpoints the editor depends on.

use async_trait::async_trait;

use jobboard_auth::Session;
use jobboard_core::{JobId, JobRecord, JobUpdate};

use crate::ApiError;

/// Read and partially update a single job posting.
///
/// Implemented over HTTP by [`crate::JobsClient`]; tests substitute
/// in-memory fakes.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait JobsApi {
    /// `GET /jobs/{id}`.
    async fn fetch_job(&self, session: &Session, id: &JobId) -> Result<JobRecord, ApiError>;

    /// `PATCH /jobs/{id}`. Any 2xx counts as success.
    async fn update_job(
        &self,
        session: &Session,
        id: &JobId,
        update: &JobUpdate,
    ) -> Result<(), ApiError>;
}
