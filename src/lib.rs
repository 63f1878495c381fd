//! Vitrine library crate providing a headless product storefront.
//!
//! The library models a product catalog demo: variant selection with
//! derived display values, a cart driven by add/remove events, a validated
//! review-submission flow, and a typed publish/subscribe channel wiring the
//! review form to the reviews list. A bubbletea-rs terminal UI drives the
//! same contract interactively.

pub mod catalog;
pub mod config;
pub mod telemetry;
pub mod tui;

pub use catalog::{
    Cart, CartAction, CartEvent, CatalogError, EventChannel, Product, ProductDisplay, Rating,
    Recommendation, ReviewDraft, ReviewRecord, ReviewRejection, ShippingCost, Storefront,
    Subscription, ValidationError, Variant,
};
pub use config::{OperationMode, VitrineConfig};
