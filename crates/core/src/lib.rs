//! `jobboard-core`: job posting domain model.
//!
//! This crate contains **pure domain** types (no transport or UI concerns):
//! identifiers, enumerated fields, the tolerant read shape and the update
//! payload.

pub mod error;
pub mod id;
pub mod job;
pub mod record;
pub mod update;

pub use error::{DomainError, DomainResult};
pub use id::JobId;
pub use job::{CATEGORIES, ExperienceLevel, JobStatus, PayType, WorkType, is_known_category};
pub use record::{JobRecord, NumberOrText, RecordPay, RecordRequirements, RecordSkill};
pub use update::{JobUpdate, Pay, RequiredSkill};
