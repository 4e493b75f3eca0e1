//! Wire shape of a job posting as returned by `GET /jobs/{id}`.
//!
//! Every field is optional: the API is allowed to omit or null anything, and
//! some fields arrive in more than one shape. Turning a [`JobRecord`] into
//! editable state (and choosing the defaults) is the editor's job; this
//! module only describes what can come over the wire.

use serde::{Deserialize, Serialize};

use crate::job::JobStatus;

/// A partially-populated job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<RecordRequirements>,
    pub category: Option<String>,
    pub company: Option<String>,
    pub pay: Option<RecordPay>,
    pub duration: Option<NumberOrText>,
    pub location: Option<String>,
    /// Work type, kept raw so out-of-set values can be reported later.
    #[serde(rename = "type")]
    pub work_type: Option<String>,
    pub experience: Option<String>,
    /// RFC 3339 timestamp (a bare `YYYY-MM-DD` is tolerated).
    pub deadline: Option<String>,
    pub status: Option<JobStatus>,
    pub required_skills: Option<Vec<RecordSkill>>,
}

/// Requirements arrive either as a list of lines or as one block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordRequirements {
    Lines(Vec<String>),
    Text(String),
}

impl RecordRequirements {
    /// Newline-joined text, as edited in a multi-line input.
    pub fn to_text(&self) -> String {
        match self {
            RecordRequirements::Lines(lines) => lines.join("\n"),
            RecordRequirements::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordPay {
    pub amount: Option<NumberOrText>,
    #[serde(rename = "type")]
    pub pay_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSkill {
    pub name: Option<String>,
    pub level: Option<String>,
}

/// A numeric field that some API versions send as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrText {
    /// Decimal text for a form input. Whole floats render without a
    /// fractional part (`1500.0` becomes `"1500"`).
    pub fn to_text(&self) -> String {
        match self {
            NumberOrText::Text(text) => text.clone(),
            NumberOrText::Number(n) if n.is_f64() => match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            },
            NumberOrText::Number(n) => n.to_string(),
        }
    }
}
