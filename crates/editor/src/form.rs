//! Editable form state for a job posting.
//!
//! Text inputs are held as the user typed them (`pay.amount`, `duration`,
//! `deadline` and `requirements` stay strings until submit). Enumerated
//! fields are typed, except that a value loaded from the server may be an
//! [`Selection::Unrecognized`] spelling, which submit-time validation
//! reports.

use core::str::FromStr;

use jobboard_core::{ExperienceLevel, JobStatus, PayType, WorkType, is_known_category};

/// Value of an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Known(T),
    /// A spelling outside the allowed set, as received from the server.
    Unrecognized(String),
}

impl<T: FromStr> Selection<T> {
    /// Classify a raw spelling.
    pub fn parse(raw: &str) -> Self {
        raw.parse()
            .map(Selection::Known)
            .unwrap_or_else(|_| Selection::Unrecognized(raw.to_string()))
    }
}

impl<T: Copy> Selection<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Selection::Known(value) => Some(*value),
            Selection::Unrecognized(_) => None,
        }
    }
}

impl<T: core::fmt::Display> Selection<T> {
    /// Text for the form control.
    pub fn value_text(&self) -> String {
        match self {
            Selection::Known(value) => value.to_string(),
            Selection::Unrecognized(raw) => raw.clone(),
        }
    }
}

impl<T: Default> Default for Selection<T> {
    fn default() -> Self {
        Selection::Known(T::default())
    }
}

/// Addressable form fields. Nested fields use dotted paths (`pay.amount`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Requirements,
    Category,
    Company,
    PayAmount,
    PayType,
    Duration,
    Location,
    WorkType,
    Experience,
    Deadline,
    Status,
}

impl Field {
    /// Fields that must be non-blank for a submit to go out.
    pub const REQUIRED: &'static [Field] = &[
        Field::Title,
        Field::Description,
        Field::Requirements,
        Field::PayAmount,
        Field::Duration,
        Field::Category,
        Field::Deadline,
        Field::Company,
        Field::Location,
    ];

    /// Input name, as used by [`JobForm::set_field`].
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Requirements => "requirements",
            Field::Category => "category",
            Field::Company => "company",
            Field::PayAmount => "pay.amount",
            Field::PayType => "pay.type",
            Field::Duration => "duration",
            Field::Location => "location",
            Field::WorkType => "type",
            Field::Experience => "experience",
            Field::Deadline => "deadline",
            Field::Status => "status",
        }
    }

    /// Resolve an input name. Dotted names address a child of a nested
    /// group; only `pay` has children.
    pub fn from_name(name: &str) -> Option<Field> {
        if let Some((parent, child)) = name.split_once('.') {
            return match (parent, child) {
                ("pay", "amount") => Some(Field::PayAmount),
                ("pay", "type") => Some(Field::PayType),
                _ => None,
            };
        }
        let field = match name {
            "title" => Field::Title,
            "description" => Field::Description,
            "requirements" => Field::Requirements,
            "category" => Field::Category,
            "company" => Field::Company,
            "duration" => Field::Duration,
            "location" => Field::Location,
            "type" => Field::WorkType,
            "experience" => Field::Experience,
            "deadline" => Field::Deadline,
            "status" => Field::Status,
            _ => return None,
        };
        Some(field)
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a single field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Applied,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No field has this name.
    UnknownField,
    /// The value is not in the field's allowed set; the old value stays.
    OutOfSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayForm {
    pub amount: String,
    pub pay_type: Selection<PayType>,
}

/// The whole editable posting.
///
/// Required skills are only reachable through [`JobForm::add_skill`] and
/// [`JobForm::remove_skill`], which keep names trimmed, non-empty and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    /// One requirement per line.
    pub requirements: String,
    pub category: String,
    pub company: String,
    pub pay: PayForm,
    pub duration: String,
    pub location: String,
    pub work_type: Selection<WorkType>,
    pub experience: Selection<ExperienceLevel>,
    /// `YYYY-MM-DD`.
    pub deadline: String,
    pub status: JobStatus,
    required_skills: Vec<String>,
    skill_draft: String,
}

impl JobForm {
    /// Apply an edit addressed by input name.
    pub fn set_field(&mut self, name: &str, value: &str) -> FieldUpdate {
        match Field::from_name(name) {
            Some(field) => self.set(field, value),
            None => {
                tracing::debug!(name, "ignoring edit to unknown field");
                FieldUpdate::Ignored(IgnoreReason::UnknownField)
            }
        }
    }

    /// Apply an edit. Enumerated fields silently keep their previous value
    /// when `value` is outside the allowed set.
    pub fn set(&mut self, field: Field, value: &str) -> FieldUpdate {
        match field {
            Field::Title => self.title = value.to_string(),
            Field::Description => self.description = value.to_string(),
            Field::Requirements => self.requirements = value.to_string(),
            Field::Company => self.company = value.to_string(),
            Field::PayAmount => self.pay.amount = value.to_string(),
            Field::Duration => self.duration = value.to_string(),
            Field::Location => self.location = value.to_string(),
            Field::Deadline => self.deadline = value.to_string(),
            Field::Status => self.status = JobStatus::from(value.to_string()),
            Field::Category => {
                if !is_known_category(value) {
                    return FieldUpdate::Ignored(IgnoreReason::OutOfSet);
                }
                self.category = value.to_string();
            }
            Field::PayType => return set_choice(&mut self.pay.pay_type, value),
            Field::WorkType => return set_choice(&mut self.work_type, value),
            Field::Experience => return set_choice(&mut self.experience, value),
        }
        FieldUpdate::Applied
    }

    /// Current text of a field, as a form control would show it.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Description => self.description.clone(),
            Field::Requirements => self.requirements.clone(),
            Field::Category => self.category.clone(),
            Field::Company => self.company.clone(),
            Field::PayAmount => self.pay.amount.clone(),
            Field::PayType => self.pay.pay_type.value_text(),
            Field::Duration => self.duration.clone(),
            Field::Location => self.location.clone(),
            Field::WorkType => self.work_type.value_text(),
            Field::Experience => self.experience.value_text(),
            Field::Deadline => self.deadline.clone(),
            Field::Status => self.status.to_string(),
        }
    }

    pub fn skills(&self) -> &[String] {
        &self.required_skills
    }

    /// Add a skill by name. Surrounding whitespace is trimmed; blank names
    /// and exact (case-sensitive) duplicates are refused.
    pub fn add_skill(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.required_skills.iter().any(|s| s == name) {
            return false;
        }
        self.required_skills.push(name.to_string());
        true
    }

    /// Remove every skill whose name matches exactly. Returns whether
    /// anything was removed.
    pub fn remove_skill(&mut self, name: &str) -> bool {
        let before = self.required_skills.len();
        self.required_skills.retain(|s| s != name);
        self.required_skills.len() != before
    }

    pub fn skill_draft(&self) -> &str {
        &self.skill_draft
    }

    pub fn set_skill_draft(&mut self, text: &str) {
        self.skill_draft = text.to_string();
    }

    /// Whether the "Add" control should be enabled.
    pub fn can_add_skill(&self) -> bool {
        !self.skill_draft.trim().is_empty()
    }

    /// Add the drafted skill; the draft is cleared only when it was added.
    pub fn add_skill_from_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.skill_draft);
        if self.add_skill(&draft) {
            true
        } else {
            self.skill_draft = draft;
            false
        }
    }

    /// Label for the pay amount input.
    pub fn pay_amount_label(&self) -> &'static str {
        self.pay.pay_type.known().unwrap_or_default().amount_label()
    }
}

fn set_choice<T: FromStr>(slot: &mut Selection<T>, value: &str) -> FieldUpdate {
    match value.parse::<T>() {
        Ok(parsed) => {
            *slot = Selection::Known(parsed);
            FieldUpdate::Applied
        }
        Err(_) => FieldUpdate::Ignored(IgnoreReason::OutOfSet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_nested_fields_update_by_name() {
        let mut form = JobForm::default();
        assert_eq!(form.set_field("title", "Landing page"), FieldUpdate::Applied);
        assert_eq!(form.set_field("pay.amount", "1500"), FieldUpdate::Applied);
        assert_eq!(form.set_field("pay.type", "hourly"), FieldUpdate::Applied);

        assert_eq!(form.title, "Landing page");
        assert_eq!(form.pay.amount, "1500");
        assert_eq!(form.pay.pay_type, Selection::Known(PayType::Hourly));
        assert_eq!(form.value(Field::PayType), "hourly");
    }

    #[test]
    fn unknown_names_are_ignored() {
        let mut form = JobForm::default();
        let before = form.clone();
        assert_eq!(
            form.set_field("salary", "9000"),
            FieldUpdate::Ignored(IgnoreReason::UnknownField)
        );
        assert_eq!(
            form.set_field("pay.currency", "INR"),
            FieldUpdate::Ignored(IgnoreReason::UnknownField)
        );
        assert_eq!(form, before);
    }

    #[test]
    fn out_of_set_work_type_keeps_previous_value() {
        let mut form = JobForm::default();
        form.set_field("type", "onsite");
        assert_eq!(
            form.set_field("type", "hybrid-ish"),
            FieldUpdate::Ignored(IgnoreReason::OutOfSet)
        );
        assert_eq!(form.work_type, Selection::Known(WorkType::Onsite));
    }

    #[test]
    fn out_of_set_experience_and_category_are_ignored() {
        let mut form = JobForm::default();
        form.set_field("experience", "Expert");
        form.set_field("experience", "Guru");
        assert_eq!(form.experience, Selection::Known(ExperienceLevel::Expert));

        form.set_field("category", "DevOps");
        assert_eq!(
            form.set_field("category", "Basket Weaving"),
            FieldUpdate::Ignored(IgnoreReason::OutOfSet)
        );
        assert_eq!(form.category, "DevOps");
    }

    #[test]
    fn valid_choice_replaces_an_unrecognized_one() {
        let mut form = JobForm {
            work_type: Selection::Unrecognized("hybrid-ish".into()),
            ..JobForm::default()
        };
        assert_eq!(form.value(Field::WorkType), "hybrid-ish");
        form.set_field("type", "remote");
        assert_eq!(form.work_type, Selection::Known(WorkType::Remote));
    }

    #[test]
    fn trimmed_duplicate_skill_is_refused() {
        let mut form = JobForm::default();
        assert!(form.add_skill("  React  "));
        assert!(!form.add_skill("React"));
        assert_eq!(form.skills(), ["React".to_string()]);
    }

    #[test]
    fn skill_matching_is_case_sensitive() {
        let mut form = JobForm::default();
        assert!(form.add_skill("react"));
        assert!(form.add_skill("React"));
        assert_eq!(form.skills().len(), 2);
    }

    #[test]
    fn blank_skills_are_refused() {
        let mut form = JobForm::default();
        assert!(!form.add_skill(""));
        assert!(!form.add_skill("   "));
        assert!(form.skills().is_empty());
    }

    #[test]
    fn removing_an_absent_skill_is_a_no_op() {
        let mut form = JobForm::default();
        form.add_skill("Rust");
        form.add_skill("SQL");
        assert!(!form.remove_skill("Go"));
        assert!(!form.remove_skill("rust"));
        assert_eq!(form.skills().len(), 2);
        assert!(form.remove_skill("Rust"));
        assert_eq!(form.skills(), ["SQL".to_string()]);
    }

    #[test]
    fn draft_is_cleared_only_after_a_successful_add() {
        let mut form = JobForm::default();
        assert!(!form.can_add_skill());

        form.set_skill_draft(" Figma ");
        assert!(form.can_add_skill());
        assert!(form.add_skill_from_draft());
        assert_eq!(form.skill_draft(), "");

        form.set_skill_draft("Figma");
        assert!(!form.add_skill_from_draft());
        assert_eq!(form.skill_draft(), "Figma");
    }

    #[test]
    fn amount_label_tracks_pay_type() {
        let mut form = JobForm::default();
        assert_eq!(form.pay_amount_label(), "Fixed Pay (₹)");
        form.set_field("pay.type", "hourly");
        assert_eq!(form.pay_amount_label(), "Hourly Rate (₹)");
    }

    #[test]
    fn every_field_name_resolves_back_to_itself() {
        let all = [
            Field::Title,
            Field::Description,
            Field::Requirements,
            Field::Category,
            Field::Company,
            Field::PayAmount,
            Field::PayType,
            Field::Duration,
            Field::Location,
            Field::WorkType,
            Field::Experience,
            Field::Deadline,
            Field::Status,
        ];
        for field in all {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: whatever is added, skills stay trimmed, non-empty and unique.
            #[test]
            fn skills_stay_a_trimmed_set(names in prop::collection::vec("[ a-cA-C]{0,4}", 0..20)) {
                let mut form = JobForm::default();
                for name in &names {
                    form.add_skill(name);
                }
                let skills = form.skills();
                for (i, skill) in skills.iter().enumerate() {
                    prop_assert!(!skill.is_empty());
                    prop_assert_eq!(skill.trim(), skill.as_str());
                    prop_assert!(!skills[i + 1..].contains(skill));
                }
                for name in &names {
                    if !name.trim().is_empty() {
                        prop_assert!(skills.iter().any(|s| s == name.trim()));
                    }
                }
            }
        }
    }
}
