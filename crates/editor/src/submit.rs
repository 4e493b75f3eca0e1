//! Pre-submit validation and the form → payload transform.

use chrono::NaiveDate;
use thiserror::Error;

use jobboard_core::{JobUpdate, Pay, RequiredSkill};

use crate::form::{Field, JobForm};

/// Shown when an update fails without a server-provided message.
pub const UPDATE_FAILED: &str = "Failed to update job";

/// Shown after a successful update.
pub const UPDATE_SUCCEEDED: &str = "Job updated successfully!";

/// Why a form cannot be submitted. `Display` is the user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired { fields: Vec<Field> },

    #[error("Invalid work type selected")]
    InvalidWorkType,

    #[error("Invalid experience level selected")]
    InvalidExperience,

    #[error("Invalid pay type selected")]
    InvalidPayType,

    #[error("Pay amount must be a non-negative number")]
    InvalidPayAmount,

    #[error("Duration must be a positive number of weeks")]
    InvalidDuration,

    #[error("Deadline must be a valid date")]
    InvalidDeadline,
}

/// Check the form and build the `PATCH` body.
///
/// Checks run in a fixed order: required fields, work type, experience,
/// pay type, then the numeric and date conversions. The first failure wins.
pub fn build_update(form: &JobForm) -> Result<JobUpdate, ValidationError> {
    let missing: Vec<Field> = Field::REQUIRED
        .iter()
        .copied()
        .filter(|f| form.value(*f).trim().is_empty())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingRequired { fields: missing });
    }

    let work_type = form.work_type.known().ok_or(ValidationError::InvalidWorkType)?;
    let experience = form
        .experience
        .known()
        .ok_or(ValidationError::InvalidExperience)?;
    let pay_type = form.pay.pay_type.known().ok_or(ValidationError::InvalidPayType)?;

    let amount = parse_amount(&form.pay.amount)?;
    let duration = parse_duration(&form.duration)?;
    let deadline = NaiveDate::parse_from_str(form.deadline.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDeadline)?
        .and_hms_opt(0, 0, 0)
        .ok_or(ValidationError::InvalidDeadline)?
        .and_utc();

    Ok(JobUpdate {
        title: form.title.clone(),
        description: form.description.clone(),
        requirements: split_requirements(&form.requirements),
        category: form.category.clone(),
        company: form.company.clone(),
        pay: Pay { amount, pay_type },
        duration,
        location: form.location.clone(),
        work_type,
        experience,
        deadline,
        status: form.status.clone(),
        required_skills: form
            .skills()
            .iter()
            .map(|name| RequiredSkill {
                name: name.clone(),
                level: experience,
            })
            .collect(),
    })
}

/// One requirement per line: lines are trimmed and blank lines dropped,
/// order kept.
pub fn split_requirements(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(ValidationError::InvalidPayAmount),
    }
}

/// Whole weeks, at least one. `"6.0"` is accepted as six.
fn parse_duration(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(weeks) if weeks.fract() == 0.0 && weeks >= 1.0 && weeks <= u32::MAX as f64 => {
            Ok(weeks as u32)
        }
        _ => Err(ValidationError::InvalidDuration),
    }
}
