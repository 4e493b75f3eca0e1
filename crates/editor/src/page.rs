//! Page-level state machine for editing one job.
//!
//! ```text
//! Idle ──mount──▶ Loading ──ok──▶ Ready ──submit──▶ Submitting ──ok──▶ Success
//!                    │                ▲                  │
//!                    └──err──▶ Error ─┘◀──────err────────┘
//! ```
//!
//! The page performs no IO. Starting a request hands back a [`Ticket`]; the
//! host runs the request and reports the outcome with that ticket. Outcomes
//! for tickets that are no longer current (a newer request started, or the
//! page was unmounted) are dropped without touching state.

use thiserror::Error;

use jobboard_auth::{AccessDenied, CurrentUser, require_recruiter};
use jobboard_client::ApiError;
use jobboard_core::{JobId, JobRecord, JobUpdate};

use crate::config::EditorConfig;
use crate::form::JobForm;
use crate::loader::FETCH_FAILED;
use crate::navigation::{Redirect, Route};
use crate::submit::{UPDATE_FAILED, UPDATE_SUCCEEDED, ValidationError, build_update};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Idle,
    Loading,
    Ready,
    Submitting,
    Error(String),
    Success(String),
}

impl PageState {
    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, PageState::Loading | PageState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            PageState::Success(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Load,
    Submit,
}

/// Identifies one request started by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    kind: RequestKind,
}

/// Outcome of mounting the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mount {
    /// Access granted; fetch the job and report back with this ticket.
    Load(Ticket),
    /// Render nothing and leave.
    Denied {
        reason: AccessDenied,
        redirect: Redirect,
    },
}

/// Why a submit did not start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitRefused {
    #[error("a request is already in flight")]
    Busy,

    #[error("the job was already updated")]
    AlreadyUpdated,

    #[error("the page is not mounted")]
    NotMounted,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone)]
pub struct EditJobPage {
    job_id: JobId,
    state: PageState,
    form: JobForm,
    generation: u64,
    mounted: bool,
    redirect_delay: std::time::Duration,
}

impl EditJobPage {
    pub fn new(job_id: JobId, config: &EditorConfig) -> Self {
        Self {
            job_id,
            state: PageState::Idle,
            form: JobForm::default(),
            generation: 0,
            mounted: false,
            redirect_delay: config.redirect_delay,
        }
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn form(&self) -> &JobForm {
        &self.form
    }

    /// User edits. Nothing is sent until [`EditJobPage::begin_submit`].
    pub fn form_mut(&mut self) -> &mut JobForm {
        &mut self.form
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Gate on the signed-in user, then start loading the job.
    pub fn mount(&mut self, user: Option<&CurrentUser>) -> Mount {
        if let Err(reason) = require_recruiter(user) {
            tracing::info!(job_id = %self.job_id, %reason, "edit page not available");
            return Mount::Denied {
                reason,
                redirect: Redirect::now(Route::Home),
            };
        }
        self.mounted = true;
        Mount::Load(self.start(RequestKind::Load, PageState::Loading))
    }

    /// Stop accepting request outcomes. Pending completions are dropped.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Report the result of the fetch started by [`EditJobPage::mount`].
    ///
    /// Returns the redirect to schedule, if any (404/403 go back to the
    /// listing).
    pub fn finish_load(
        &mut self,
        ticket: Ticket,
        result: Result<JobRecord, ApiError>,
    ) -> Option<Redirect> {
        if !self.is_current(ticket, RequestKind::Load) {
            return None;
        }
        match result {
            Ok(record) => {
                tracing::info!(job_id = %self.job_id, "job loaded");
                self.form = JobForm::from(record);
                self.state = PageState::Ready;
                None
            }
            Err(err) => {
                tracing::error!(job_id = %self.job_id, error = %err, "failed to fetch job");
                self.state = PageState::Error(err.user_message(FETCH_FAILED));
                err.redirects_to_listing()
                    .then(|| Redirect::after(Route::Jobs, self.redirect_delay))
            }
        }
    }

    /// Validate the form and, if it passes, start the update.
    ///
    /// Prior messages are cleared first. A validation failure leaves the
    /// page in `Error` with the message and issues no request.
    pub fn begin_submit(&mut self) -> Result<(Ticket, JobUpdate), SubmitRefused> {
        if !self.mounted {
            return Err(SubmitRefused::NotMounted);
        }
        match self.state {
            PageState::Idle | PageState::Loading | PageState::Submitting => {
                return Err(SubmitRefused::Busy);
            }
            PageState::Success(_) => return Err(SubmitRefused::AlreadyUpdated),
            PageState::Ready | PageState::Error(_) => {}
        }

        self.state = PageState::Ready;
        match build_update(&self.form) {
            Ok(update) => {
                tracing::info!(job_id = %self.job_id, "submitting job update");
                let ticket = self.start(RequestKind::Submit, PageState::Submitting);
                Ok((ticket, update))
            }
            Err(err) => {
                tracing::debug!(job_id = %self.job_id, ?err, "job update blocked by validation");
                self.state = PageState::Error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Report the result of the update started by
    /// [`EditJobPage::begin_submit`].
    pub fn finish_submit(&mut self, ticket: Ticket, result: Result<(), ApiError>) -> Option<Redirect> {
        if !self.is_current(ticket, RequestKind::Submit) {
            return None;
        }
        match result {
            Ok(()) => {
                tracing::info!(job_id = %self.job_id, "job updated");
                self.state = PageState::Success(UPDATE_SUCCEEDED.to_string());
                Some(Redirect::after(Route::Jobs, self.redirect_delay))
            }
            Err(err) => {
                tracing::error!(job_id = %self.job_id, error = %err, "failed to update job");
                self.state = PageState::Error(err.user_message(UPDATE_FAILED));
                None
            }
        }
    }

    /// Leave without saving.
    pub fn cancel(&self) -> Redirect {
        Redirect::now(Route::Jobs)
    }

    fn start(&mut self, kind: RequestKind, state: PageState) -> Ticket {
        self.generation += 1;
        self.state = state;
        Ticket {
            generation: self.generation,
            kind,
        }
    }

    fn is_current(&self, ticket: Ticket, kind: RequestKind) -> bool {
        let expected_state = match kind {
            RequestKind::Load => PageState::Loading,
            RequestKind::Submit => PageState::Submitting,
        };
        let current = self.mounted
            && ticket.kind == kind
            && ticket.generation == self.generation
            && self.state == expected_state;
        if !current {
            tracing::warn!(
                job_id = %self.job_id,
                ?ticket,
                mounted = self.mounted,
                "discarding stale {:?} response",
                kind
            );
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use jobboard_auth::Role;
    use serde_json::json;

    fn recruiter() -> CurrentUser {
        CurrentUser::new("u1", Role::RECRUITER)
    }

    fn page() -> EditJobPage {
        EditJobPage::new("job-1".parse().unwrap(), &EditorConfig::default())
    }

    fn record() -> JobRecord {
        serde_json::from_value(json!({
            "title": "Landing page",
            "description": "One pager",
            "requirements": ["HTML", "CSS"],
            "category": "Web Development",
            "company": "Acme",
            "pay": { "amount": "1500", "type": "fixed" },
            "duration": 4,
            "location": "Pune",
            "type": "remote",
            "experience": "Intermediate",
            "deadline": "2025-06-30T00:00:00.000Z",
            "requiredSkills": [{ "name": "React", "level": "Intermediate" }]
        }))
        .unwrap()
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            message: Some("Job not found".into()),
        }
    }

    fn loaded() -> EditJobPage {
        let mut page = page();
        let Mount::Load(ticket) = page.mount(Some(&recruiter())) else {
            panic!("recruiter should be admitted");
        };
        assert_eq!(page.finish_load(ticket, Ok(record())), None);
        page
    }

    #[test]
    fn mount_starts_loading() {
        let mut page = page();
        assert_eq!(page.state(), &PageState::Idle);
        assert!(matches!(page.mount(Some(&recruiter())), Mount::Load(_)));
        assert_eq!(page.state(), &PageState::Loading);
        assert!(page.state().is_busy());
    }

    #[test]
    fn non_recruiters_are_sent_home() {
        for user in [None, Some(CurrentUser::new("u2", Role::new("freelancer")))] {
            let mut page = page();
            match page.mount(user.as_ref()) {
                Mount::Denied { redirect, .. } => {
                    assert_eq!(redirect, Redirect::now(Route::Home));
                }
                other => panic!("expected denial, got {other:?}"),
            }
            assert_eq!(page.state(), &PageState::Idle);
            assert!(!page.is_mounted());
        }
    }

    #[test]
    fn successful_load_populates_form() {
        let page = loaded();
        assert_eq!(page.state(), &PageState::Ready);
        assert_eq!(page.form().title, "Landing page");
        assert_eq!(page.form().requirements, "HTML\nCSS");
        assert_eq!(page.form().deadline, "2025-06-30");
        assert_eq!(page.form().skills(), ["React".to_string()]);
    }

    #[test]
    fn not_found_load_shows_message_and_redirects_to_listing() {
        let mut page = page();
        let Mount::Load(ticket) = page.mount(Some(&recruiter())) else {
            unreachable!()
        };
        let redirect = page.finish_load(ticket, Err(not_found()));
        assert_eq!(
            redirect,
            Some(Redirect::after(Route::Jobs, Duration::from_secs(2)))
        );
        assert_eq!(page.state(), &PageState::Error("Job not found".into()));
    }

    #[test]
    fn forbidden_load_without_message_uses_fallback() {
        let mut page = page();
        let Mount::Load(ticket) = page.mount(Some(&recruiter())) else {
            unreachable!()
        };
        let redirect = page.finish_load(
            ticket,
            Err(ApiError::Status {
                status: 403,
                message: None,
            }),
        );
        assert_eq!(redirect.map(|r| r.to), Some(Route::Jobs));
        assert_eq!(page.state().error(), Some("Failed to fetch job details"));
    }

    #[test]
    fn other_load_failures_stay_on_the_page() {
        let mut page = page();
        let Mount::Load(ticket) = page.mount(Some(&recruiter())) else {
            unreachable!()
        };
        let redirect = page.finish_load(ticket, Err(ApiError::Network("refused".into())));
        assert_eq!(redirect, None);
        assert_eq!(page.state().error(), Some("Failed to fetch job details"));
    }

    #[test]
    fn load_after_unmount_is_discarded() {
        let mut page = page();
        let Mount::Load(ticket) = page.mount(Some(&recruiter())) else {
            unreachable!()
        };
        page.unmount();
        assert_eq!(page.finish_load(ticket, Err(not_found())), None);
        assert_eq!(page.state(), &PageState::Loading);
        assert_eq!(page.form(), &JobForm::default());
    }

    #[test]
    fn superseded_load_is_discarded() {
        let mut page = page();
        let Mount::Load(first) = page.mount(Some(&recruiter())) else {
            unreachable!()
        };
        let Mount::Load(second) = page.mount(Some(&recruiter())) else {
            unreachable!()
        };
        assert_eq!(page.finish_load(first, Err(not_found())), None);
        assert_eq!(page.state(), &PageState::Loading);
        assert_eq!(page.finish_load(second, Ok(record())), None);
        assert_eq!(page.state(), &PageState::Ready);
    }

    #[test]
    fn submit_round_trip_succeeds_and_redirects() {
        let mut page = loaded();
        let (ticket, update) = page.begin_submit().unwrap();
        assert_eq!(page.state(), &PageState::Submitting);
        assert_eq!(update.pay.amount, 1500.0);
        assert_eq!(update.requirements, ["HTML", "CSS"]);

        let redirect = page.finish_submit(ticket, Ok(()));
        assert_eq!(
            redirect,
            Some(Redirect::after(Route::Jobs, Duration::from_secs(2)))
        );
        assert_eq!(page.state().success(), Some("Job updated successfully!"));
        assert_eq!(page.begin_submit(), Err(SubmitRefused::AlreadyUpdated));
    }

    #[test]
    fn invalid_form_never_starts_a_request() {
        let mut page = loaded();
        page.form_mut().set_field("title", "");
        assert_eq!(
            page.begin_submit().unwrap_err().to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(
            page.state(),
            &PageState::Error("Please fill in all required fields".into())
        );
    }

    #[test]
    fn failed_submit_can_be_retried() {
        let mut page = loaded();
        let (ticket, _) = page.begin_submit().unwrap();
        let redirect = page.finish_submit(
            ticket,
            Err(ApiError::Status {
                status: 400,
                message: Some("Deadline is in the past".into()),
            }),
        );
        assert_eq!(redirect, None);
        assert_eq!(page.state().error(), Some("Deadline is in the past"));

        let (retry, _) = page.begin_submit().unwrap();
        assert_eq!(page.state(), &PageState::Submitting);
        page.finish_submit(retry, Err(ApiError::Network("reset".into())));
        assert_eq!(page.state().error(), Some("Failed to update job"));
    }

    #[test]
    fn requests_are_exclusive() {
        let mut page = page();
        assert_eq!(page.begin_submit(), Err(SubmitRefused::NotMounted));

        page.mount(Some(&recruiter()));
        assert_eq!(page.begin_submit(), Err(SubmitRefused::Busy));
    }

    #[test]
    fn load_ticket_cannot_finish_a_submit() {
        let mut page = page();
        let Mount::Load(load) = page.mount(Some(&recruiter())) else {
            unreachable!()
        };
        page.finish_load(load, Ok(record()));
        let (_submit, _) = page.begin_submit().unwrap();

        assert_eq!(page.finish_submit(load, Ok(())), None);
        assert_eq!(page.state(), &PageState::Submitting);
    }

    #[test]
    fn validation_error_then_fix_clears_the_message() {
        let mut page = loaded();
        page.form_mut().set_field("pay.amount", "");
        assert!(page.begin_submit().is_err());
        page.form_mut().set_field("pay.amount", "2000");
        let (_, update) = page.begin_submit().unwrap();
        assert_eq!(update.pay.amount, 2000.0);
        assert_eq!(page.state().error(), None);
    }

    #[test]
    fn cancel_goes_straight_to_listing() {
        assert_eq!(page().cancel(), Redirect::now(Route::Jobs));
    }
}
