//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two operation modes:
//! - [`storefront_tui`]: Interactive storefront TUI
//! - [`summary`]: Non-interactive product summary on stdout

pub mod storefront_tui;
pub mod summary;
