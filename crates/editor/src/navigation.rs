//! Where the page can send the user.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Job listing.
    Jobs,
    Home,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Jobs => "/jobs",
            Route::Home => "/",
        }
    }
}

/// A navigation the page asks its host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

impl Redirect {
    pub fn now(to: Route) -> Self {
        Self {
            to,
            after: Duration::ZERO,
        }
    }

    pub fn after(to: Route, delay: Duration) -> Self {
        Self { to, after: delay }
    }
}

/// Performs (or schedules) redirects requested by the page.
pub trait Navigator {
    fn navigate(&self, redirect: Redirect);
}
