//! Body of `PATCH /jobs/{id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::job::{ExperienceLevel, JobStatus, PayType, WorkType};

/// Fully-validated partial update for a job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub category: String,
    pub company: String,
    pub pay: Pay,
    /// Weeks.
    pub duration: u32,
    pub location: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub experience: ExperienceLevel,
    #[serde(with = "iso_millis")]
    pub deadline: DateTime<Utc>,
    pub status: JobStatus,
    pub required_skills: Vec<RequiredSkill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pay {
    #[serde(serialize_with = "amount::serialize")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub pay_type: PayType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    pub level: ExperienceLevel,
}

/// `2025-01-31T00:00:00.000Z`: UTC, millisecond precision, `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Whole amounts go out as JSON integers.
mod amount {
    use serde::Serializer;

    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && *value >= 0.0 && *value <= MAX_EXACT {
            s.serialize_u64(*value as u64)
        } else {
            s.serialize_f64(*value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> JobUpdate {
        JobUpdate {
            title: "t".into(),
            description: "d".into(),
            requirements: vec!["HTML".into()],
            category: "DevOps".into(),
            company: "Acme".into(),
            pay: Pay {
                amount: 1500.0,
                pay_type: PayType::Hourly,
            },
            duration: 6,
            location: "Pune".into(),
            work_type: WorkType::Onsite,
            experience: ExperienceLevel::Expert,
            deadline: Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap(),
            status: JobStatus::Open,
            required_skills: vec![RequiredSkill {
                name: "Rust".into(),
                level: ExperienceLevel::Expert,
            }],
        }
    }

    #[test]
    fn serializes_with_api_field_names() {
        let body = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            body,
            json!({
                "title": "t",
                "description": "d",
                "requirements": ["HTML"],
                "category": "DevOps",
                "company": "Acme",
                "pay": { "amount": 1500, "type": "hourly" },
                "duration": 6,
                "location": "Pune",
                "type": "onsite",
                "experience": "Expert",
                "deadline": "2025-01-31T00:00:00.000Z",
                "status": "Open",
                "requiredSkills": [{ "name": "Rust", "level": "Expert" }]
            })
        );
    }

    #[test]
    fn fractional_amounts_stay_fractional() {
        let mut update = sample();
        update.pay.amount = 12.5;
        let body = serde_json::to_value(update).unwrap();
        assert_eq!(body["pay"]["amount"], json!(12.5));
    }

    #[test]
    fn deserializes_what_it_serializes() {
        let update = sample();
        let text = serde_json::to_string(&update).unwrap();
        let back: JobUpdate = serde_json::from_str(&text).unwrap();
        assert_eq!(back, update);
    }
}
