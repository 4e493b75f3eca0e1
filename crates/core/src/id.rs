//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a job posting, as issued by the backend.
///
/// The backend owns the id format (document ids, not UUIDs), so this is an
/// opaque string. It is interpolated into request paths and must therefore
/// be non-empty and contain no path or query separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for JobId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JobId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::invalid_id("JobId: empty"));
        }
        if let Some(c) = s.chars().find(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace()) {
            return Err(DomainError::invalid_id(format!(
                "JobId: unexpected character {c:?} in '{s}'"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<JobId> for String {
    fn from(value: JobId) -> Self {
        value.0
    }
}
