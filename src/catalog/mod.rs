//! Headless storefront domain: products, variants, cart, reviews, shipping.
//!
//! This module contains the behavioural core of the demo with no terminal
//! concerns. State transitions are synchronous and single-threaded; the
//! [`events::EventChannel`] delivers publications to subscribers before the
//! publishing call returns.
//!
//! # Modules
//!
//! - [`model`]: Product, variant, and review data types
//! - [`display`]: Selected-variant state and derived display values
//! - [`review`]: Review draft state machine and validation
//! - [`cart`]: Cart entries and add/remove semantics
//! - [`shipping`]: Premium/standard shipping cost mapping
//! - [`events`]: Typed synchronous publish/subscribe channel
//! - [`storefront`]: Facade wiring the above into one headless surface

pub mod cart;
pub mod display;
mod error;
pub mod events;
pub mod model;
pub mod review;
pub mod shipping;
pub mod storefront;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cart::{Cart, CartAction, CartEvent};
pub use display::ProductDisplay;
pub use error::{CatalogError, ValidationError};
pub use events::{EventChannel, Subscription};
pub use model::{Product, Rating, Recommendation, ReviewRecord, Variant};
pub use review::{ReviewDraft, ReviewRejection};
pub use shipping::ShippingCost;
pub use storefront::Storefront;
