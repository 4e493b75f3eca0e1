//! Runs an [`EditJobPage`] against a [`JobsApi`] and a [`Navigator`].

use jobboard_auth::{AccessDenied, Session};
use jobboard_client::JobsApi;

use crate::navigation::Navigator;
use crate::page::{EditJobPage, Mount, SubmitRefused};

/// Owns a page and the collaborators it needs to do IO.
pub struct PageDriver<A, N> {
    page: EditJobPage,
    api: A,
    session: Session,
    navigator: N,
}

impl<A, N> PageDriver<A, N>
where
    A: JobsApi,
    N: Navigator,
{
    pub fn new(page: EditJobPage, api: A, session: Session, navigator: N) -> Self {
        Self {
            page,
            api,
            session,
            navigator,
        }
    }

    pub fn page(&self) -> &EditJobPage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut EditJobPage {
        &mut self.page
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Check access and load the job. On denial the home redirect has
    /// already been handed to the navigator.
    pub async fn mount(&mut self) -> Result<(), AccessDenied> {
        let ticket = match self.page.mount(self.session.user()) {
            Mount::Load(ticket) => ticket,
            Mount::Denied { reason, redirect } => {
                self.navigator.navigate(redirect);
                return Err(reason);
            }
        };

        let result = self.api.fetch_job(&self.session, self.page.job_id()).await;
        if let Some(redirect) = self.page.finish_load(ticket, result) {
            self.navigator.navigate(redirect);
        }
        Ok(())
    }

    /// Validate and send the update. Server failures land in the page
    /// state, not in the returned error.
    pub async fn submit(&mut self) -> Result<(), SubmitRefused> {
        let (ticket, update) = self.page.begin_submit()?;
        let result = self
            .api
            .update_job(&self.session, self.page.job_id(), &update)
            .await;
        if let Some(redirect) = self.page.finish_submit(ticket, result) {
            self.navigator.navigate(redirect);
        }
        Ok(())
    }

    pub fn cancel(&self) {
        self.navigator.navigate(self.page.cancel());
    }

    pub fn unmount(&mut self) {
        self.page.unmount();
    }
}
