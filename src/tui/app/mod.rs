//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the core application state and update logic for the
//! storefront TUI. It owns the headless storefront, the tab selection, and
//! the review form state, and routes keyboard input to them.
//!
//! # Module Structure
//!
//! - `rendering`: View rendering methods for terminal output

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::catalog::Storefront;

use super::input::{InputContext, map_key_to_message};
use super::messages::AppMsg;
use super::state::{ProductTab, ReviewFormState};

mod rendering;

/// Main application model for the storefront TUI.
#[derive(Debug)]
pub struct StorefrontApp {
    /// The headless storefront driven by this UI.
    pub(crate) storefront: Storefront,
    /// Active tab; all panels keep their state while inactive.
    pub(crate) active_tab: ProductTab,
    /// Review form panel state.
    pub(crate) form: ReviewFormState,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Transient status-bar message, replaced by the next one.
    pub(crate) status: Option<String>,
}

impl StorefrontApp {
    /// Creates an application driving the given storefront.
    #[must_use]
    pub fn new(storefront: Storefront) -> Self {
        Self {
            storefront,
            active_tab: ProductTab::default(),
            form: ReviewFormState::new(),
            width: 80,
            height: 24,
            show_help: false,
            status: None,
        }
    }

    /// Creates an application for the demo product (for the initial state
    /// when no storefront was staged).
    #[must_use]
    pub fn demo() -> Self {
        Self::new(Storefront::demo(false))
    }

    /// Returns the storefront.
    #[must_use]
    pub const fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn active_tab(&self) -> ProductTab {
        self.active_tab
    }

    /// Returns the current keyboard context.
    ///
    /// Keys type into the review form while its tab is active and the help
    /// overlay is closed; otherwise shortcut keys are live.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if matches!(self.active_tab, ProductTab::MakeReview) && !self.show_help {
            InputContext::FormEditing
        } else {
            InputContext::Browsing
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to specialised handlers per message category to keep
    /// cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_variant() {
            return self.handle_variant_msg(msg);
        }
        if msg.is_cart() {
            return self.handle_cart_msg(msg);
        }
        if msg.is_tab() {
            return self.handle_tab_msg(msg);
        }
        if msg.is_form() {
            return self.handle_form_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    fn handle_variant_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SelectVariant(index) => {
                if let Err(error) = self.storefront.select_variant(*index) {
                    self.status = Some(error.to_string());
                }
            }
            AppMsg::NextVariant => self.storefront.select_next_variant(),
            AppMsg::PreviousVariant => self.storefront.select_previous_variant(),
            _ => {
                debug_assert!(false, "non-variant message routed to handle_variant_msg");
            }
        }
        None
    }

    fn handle_cart_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::AddToCart => self.storefront.add_to_cart(),
            AppMsg::RemoveFromCart => self.storefront.remove_from_cart(),
            _ => {
                debug_assert!(false, "non-cart message routed to handle_cart_msg");
            }
        }
        None
    }

    fn handle_tab_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SelectTab(tab) => self.active_tab = *tab,
            AppMsg::NextTab => self.active_tab = self.active_tab.next(),
            AppMsg::PreviousTab => self.active_tab = self.active_tab.previous(),
            _ => {
                debug_assert!(false, "non-tab message routed to handle_tab_msg");
            }
        }
        None
    }

    fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FormInput(character) => self.form.input_char(*character),
            AppMsg::FormBackspace => self.form.backspace(),
            AppMsg::FormFocusNext => self.form.focus_next(),
            AppMsg::FormFocusPrevious => self.form.focus_previous(),
            AppMsg::SubmitReview => self.handle_submit_review(),
            AppMsg::LeaveForm => self.active_tab = ProductTab::Reviews,
            _ => {
                debug_assert!(false, "non-form message routed to handle_form_msg");
            }
        }
        None
    }

    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                debug_assert!(false, "non-lifecycle message routed to handle_lifecycle_msg");
                None
            }
        }
    }

    /// Submits the review draft through the storefront.
    ///
    /// Acceptance clears the form's errors, resets its focus, and leaves a
    /// status message; the draft itself is cleared by the submission.
    /// Rejection replaces the form's error list and keeps the entered
    /// values.
    fn handle_submit_review(&mut self) {
        match self.storefront.submit_review(self.form.draft_mut()) {
            Ok(()) => {
                self.form.clear_errors();
                self.form.reset_focus();
                self.status = Some("Review submitted".to_owned());
            }
            Err(rejection) => {
                self.form.set_errors(rejection.into_errors());
            }
        }
    }
}

impl Model for StorefrontApp {
    fn init() -> (Self, Option<Cmd>) {
        // Take the staged storefront, or fall back to the demo product.
        let model = super::take_initial_storefront().map_or_else(Self::demo, Self::new);
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message(key_msg, self.input_context());
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_variant_row());
        output.push_str(&self.render_tab_bar());
        output.push('\n');
        output.push_str(&self.render_active_panel());
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
