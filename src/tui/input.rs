//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. The mapping depends on context: while
//! the review form is active, printable keys type into the focused field
//! instead of triggering shortcuts.

use super::messages::AppMsg;
use super::state::ProductTab;

/// The two keyboard contexts of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the product: shortcut keys are live.
    Browsing,
    /// The review form tab is active: printable keys are form input.
    FormEditing,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::Browsing => map_browsing_key(key),
        InputContext::FormEditing => map_form_key(key),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_browsing_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PreviousVariant),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::NextVariant),
        KeyCode::Char('a') => Some(AppMsg::AddToCart),
        KeyCode::Char('r') => Some(AppMsg::RemoveFromCart),
        KeyCode::Tab => Some(AppMsg::NextTab),
        KeyCode::BackTab => Some(AppMsg::PreviousTab),
        KeyCode::Char(digit @ '1'..='4') => ProductTab::from_digit(digit).map(AppMsg::SelectTab),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_form_key(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    match key.key {
        KeyCode::Esc => Some(AppMsg::LeaveForm),
        KeyCode::Enter => Some(AppMsg::SubmitReview),
        KeyCode::Down | KeyCode::Tab => Some(AppMsg::FormFocusNext),
        KeyCode::Up | KeyCode::BackTab => Some(AppMsg::FormFocusPrevious),
        KeyCode::Backspace => Some(AppMsg::FormBackspace),
        KeyCode::Char(character) => Some(AppMsg::FormInput(character)),
        _ => None,
    }
}
