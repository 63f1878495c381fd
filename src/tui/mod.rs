//! Terminal User Interface for the product storefront.
//!
//! This module provides an interactive TUI for browsing a product, managing
//! the cart, and submitting reviews, using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::StorefrontApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Tab and review form state management
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, we use a module-level storage pattern for the initial
//! storefront. Call [`set_initial_storefront`] before starting the program,
//! and `StorefrontApp::init()` will take ownership of it when the program
//! starts. Without a staged storefront, `init()` falls back to the demo
//! product.

use std::sync::Mutex;

use crate::catalog::Storefront;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::StorefrontApp;

/// Staging slot for the initial storefront.
///
/// A `Mutex<Option<..>>` rather than a `OnceLock` because the storefront is
/// not cloneable: `StorefrontApp::init()` must take ownership out of the
/// slot.
static INITIAL_STOREFRONT: Mutex<Option<Storefront>> = Mutex::new(None);

fn slot_lock() -> std::sync::MutexGuard<'static, Option<Storefront>> {
    match INITIAL_STOREFRONT.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Stages the storefront for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. The
/// storefront is taken by `StorefrontApp::init()` when the program starts.
///
/// Returns `true` if the storefront was staged, `false` if one was already
/// staged (the existing one is kept).
pub fn set_initial_storefront(storefront: Storefront) -> bool {
    let mut slot = slot_lock();
    if slot.is_some() {
        return false;
    }
    *slot = Some(storefront);
    true
}

/// Takes the staged storefront, leaving the slot empty.
pub(crate) fn take_initial_storefront() -> Option<Storefront> {
    slot_lock().take()
}
