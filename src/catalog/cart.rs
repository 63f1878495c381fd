//! Cart state and the add/remove events that mutate it.
//!
//! The cart lives with the top-level owner, not the product display: the
//! display only *emits* [`CartEvent`]s carrying the selected variant's id,
//! and the owner applies them here.

use serde::{Deserialize, Serialize};

/// The two cart mutations a display can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartAction {
    /// Append the variant id to the cart.
    Add,
    /// Remove the first matching occurrence, if any.
    Remove,
}

/// A cart mutation request carrying the variant it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEvent {
    /// Identifier of the variant the event refers to.
    pub variant_id: u32,
    /// Whether to add or remove.
    pub action: CartAction,
}

/// The cart: an ordered list of variant ids, one entry per add action.
///
/// Duplicates are allowed and growth is unbounded; removal takes out the
/// first matching occurrence and silently ignores absent ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<u32>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the cart entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies a cart event.
    pub fn apply(&mut self, event: &CartEvent) {
        match event.action {
            CartAction::Add => self.entries.push(event.variant_id),
            CartAction::Remove => self.remove_first(event.variant_id),
        }
    }

    /// Removes the first occurrence of `variant_id`; no-op when absent.
    fn remove_first(&mut self, variant_id: u32) {
        if let Some(position) = self.entries.iter().position(|&id| id == variant_id) {
            self.entries.remove(position);
        }
    }
}
