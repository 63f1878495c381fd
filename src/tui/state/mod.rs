//! State management for the storefront TUI.
//!
//! This module provides the state types owned by the application model that
//! are not part of the headless catalog: the active tab and the review form
//! draft with its focus and error list.

mod review_form;
mod tab;

pub use review_form::{FormField, ReviewFormState};
pub use tab::ProductTab;
