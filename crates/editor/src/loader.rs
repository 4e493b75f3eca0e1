//! Turning a fetched [`JobRecord`] into editable form state.
//!
//! Defaults for anything the API omitted or sent as `null`:
//!
//! | field            | default                                    |
//! |------------------|--------------------------------------------|
//! | text fields      | `""`                                       |
//! | `requirements`   | `""` (a list is joined with `\n`)          |
//! | `pay.amount`     | `""`                                       |
//! | `pay.type`       | `fixed`                                    |
//! | `duration`       | `""`                                       |
//! | `type`           | `remote`                                   |
//! | `experience`     | `Beginner`                                 |
//! | `deadline`       | `""` (also when it does not parse)         |
//! | `status`         | `Open` (also when `""`)                    |
//! | `requiredSkills` | empty; names trimmed, blank names dropped, |
//! |                  | duplicates collapse to the first           |

use chrono::{DateTime, NaiveDate, Utc};

use jobboard_core::{JobRecord, JobStatus, NumberOrText, RecordPay};

use crate::form::{JobForm, PayForm, Selection};

/// Shown when a load fails without a server-provided message.
pub const FETCH_FAILED: &str = "Failed to fetch job details";

impl From<JobRecord> for JobForm {
    fn from(record: JobRecord) -> Self {
        let RecordPay { amount, pay_type } = record.pay.unwrap_or_default();

        let mut form = JobForm::default();
        form.title = record.title.unwrap_or_default();
        form.description = record.description.unwrap_or_default();
        form.requirements = record
            .requirements
            .map(|r| r.to_text())
            .unwrap_or_default();
        form.category = record.category.unwrap_or_default();
        form.company = record.company.unwrap_or_default();
        form.pay = PayForm {
            amount: number_text(amount),
            pay_type: choice(pay_type),
        };
        form.duration = number_text(record.duration);
        form.location = record.location.unwrap_or_default();
        form.work_type = choice(record.work_type);
        form.experience = choice(record.experience);
        form.deadline = record
            .deadline
            .as_deref()
            .map(deadline_to_date_input)
            .unwrap_or_default();
        form.status = match record.status {
            Some(JobStatus::Other(raw)) if raw.is_empty() => JobStatus::Open,
            status => status.unwrap_or_default(),
        };

        for skill in record.required_skills.unwrap_or_default() {
            if let Some(name) = skill.name {
                form.add_skill(&name);
            }
        }
        form
    }
}

fn number_text(value: Option<NumberOrText>) -> String {
    value.map(|n| n.to_text()).unwrap_or_default()
}

/// Missing or empty spellings fall back to the field's default; anything
/// else is classified, keeping unknown spellings for validation to report.
fn choice<T: core::str::FromStr + Default>(raw: Option<String>) -> Selection<T> {
    match raw.as_deref() {
        None | Some("") => Selection::default(),
        Some(raw) => Selection::parse(raw),
    }
}

/// Calendar date (`YYYY-MM-DD`, UTC) for a deadline timestamp.
///
/// Accepts RFC 3339 timestamps and bare dates; anything else yields an
/// empty string.
pub fn deadline_to_date_input(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Utc).date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    tracing::warn!(deadline = raw, "unparsable deadline from API; leaving it blank");
    String::new()
}
