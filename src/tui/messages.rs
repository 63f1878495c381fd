//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the
//! application's update function. Messages represent user actions and
//! system events; the storefront itself is synchronous, so there are no
//! async command results.

use super::state::ProductTab;

/// Messages for the storefront TUI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    // Variant selection
    /// Select the variant at an absolute index.
    SelectVariant(usize),
    /// Move the variant selection one to the right.
    NextVariant,
    /// Move the variant selection one to the left.
    PreviousVariant,

    // Cart
    /// Add the selected variant to the cart.
    AddToCart,
    /// Remove the selected variant's first cart occurrence.
    RemoveFromCart,

    // Tab panel
    /// Activate a specific tab.
    SelectTab(ProductTab),
    /// Activate the next tab, wrapping.
    NextTab,
    /// Activate the previous tab, wrapping.
    PreviousTab,

    // Review form
    /// Type one character into the focused form field.
    FormInput(char),
    /// Apply backspace to the focused form field.
    FormBackspace,
    /// Move form focus to the next field.
    FormFocusNext,
    /// Move form focus to the previous field.
    FormFocusPrevious,
    /// Submit the review draft.
    SubmitReview,
    /// Leave the form, returning to the Reviews tab.
    LeaveForm,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether this is a variant-selection message.
    #[must_use]
    pub const fn is_variant(self) -> bool {
        matches!(
            self,
            Self::SelectVariant(_) | Self::NextVariant | Self::PreviousVariant
        )
    }

    /// Returns whether this is a cart message.
    #[must_use]
    pub const fn is_cart(self) -> bool {
        matches!(self, Self::AddToCart | Self::RemoveFromCart)
    }

    /// Returns whether this is a tab-panel message.
    #[must_use]
    pub const fn is_tab(self) -> bool {
        matches!(self, Self::SelectTab(_) | Self::NextTab | Self::PreviousTab)
    }

    /// Returns whether this is a review-form message.
    #[must_use]
    pub const fn is_form(self) -> bool {
        matches!(
            self,
            Self::FormInput(_)
                | Self::FormBackspace
                | Self::FormFocusNext
                | Self::FormFocusPrevious
                | Self::SubmitReview
                | Self::LeaveForm
        )
    }
}
