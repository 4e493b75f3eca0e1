//! Job posting vocabulary: enumerated fields and the category catalogue.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! impl_wire_enum {
    ($t:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $t {
            /// Every variant, in display order.
            pub const ALL: &'static [$t] = &[$($t::$variant),+];

            /// Spelling used on the wire and in form inputs.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($t::$variant => $wire),+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            /// Exact, case-sensitive match on the wire spelling.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($t::$variant),)+
                    other => Err(DomainError::unknown_variant($kind, other)),
                }
            }
        }
    };
}

/// Whether posted compensation is a one-time amount or an hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    #[default]
    Fixed,
    Hourly,
}

impl_wire_enum!(PayType, "pay type", {
    Fixed => "fixed",
    Hourly => "hourly",
});

impl PayType {
    /// Label for the amount input next to this pay type.
    pub fn amount_label(&self) -> &'static str {
        match self {
            PayType::Fixed => "Fixed Pay (₹)",
            PayType::Hourly => "Hourly Rate (₹)",
        }
    }

    /// Human label for the pay type selector.
    pub fn label(&self) -> &'static str {
        match self {
            PayType::Fixed => "Fixed Pay",
            PayType::Hourly => "Hourly Rate",
        }
    }
}

/// Where the work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    #[default]
    Remote,
    Hybrid,
    Onsite,
}

impl_wire_enum!(WorkType, "work type", {
    Remote => "remote",
    Hybrid => "hybrid",
    Onsite => "onsite",
});

impl WorkType {
    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Remote => "Remote",
            WorkType::Hybrid => "Hybrid",
            WorkType::Onsite => "On-site",
        }
    }
}

/// Experience level asked of candidates.
///
/// Also used as the level of every required skill at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl_wire_enum!(ExperienceLevel, "experience level", {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
    Advanced => "Advanced",
    Expert => "Expert",
});

/// Lifecycle status of a posting.
///
/// Statuses the client does not know are carried verbatim in `Other` so an
/// update never rewrites a value it could not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Closed,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Closed => "Closed",
            JobStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for JobStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Open" => JobStatus::Open,
            "In Progress" => JobStatus::InProgress,
            "Completed" => JobStatus::Completed,
            "Closed" => JobStatus::Closed,
            _ => JobStatus::Other(value),
        }
    }
}

impl From<JobStatus> for String {
    fn from(value: JobStatus) -> Self {
        match value {
            JobStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selectable job categories.
pub const CATEGORIES: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "UI/UX Design",
    "Graphic Design",
    "Content Writing",
    "Digital Marketing",
    "Data Science",
    "Machine Learning",
    "DevOps",
    "Video Editing",
    "Translation",
    "Customer Support",
];

/// Whether `name` is one of the selectable [`CATEGORIES`] (exact match).
pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}
