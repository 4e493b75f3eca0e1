//! `jobboard-editor`
//!
//! **Responsibility:** the "Edit Job" page for recruiters.
//!
//! This crate provides:
//! - Form state for a job posting, with per-field edits and a skills set
//! - Decoding a fetched job into that state (every default in one place)
//! - Pre-submit validation and the update payload transform
//! - An explicit page state machine that performs no IO itself
//! - A driver that runs the page against the jobs API
//! - A Leptos front end (wasm32 only)
//!
//! The API remains the authority: the recruiter check here only decides what
//! to render.

pub mod config;
pub mod driver;
pub mod form;
pub mod loader;
pub mod navigation;
pub mod page;
pub mod submit;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::EditorConfig;
pub use driver::PageDriver;
pub use form::{Field, FieldUpdate, IgnoreReason, JobForm, Selection};
pub use navigation::{Navigator, Redirect, Route};
pub use page::{EditJobPage, Mount, PageState, SubmitRefused, Ticket};
pub use submit::{ValidationError, build_update, split_requirements};
