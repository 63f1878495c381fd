//! Storefront facade: the headless contract surface of the demo.
//!
//! Wires a [`ProductDisplay`], the cart owner, and the event channels into
//! one object exposing variant selection, cart mutation, review submission,
//! and change-observation callbacks. All state transitions are synchronous;
//! observers run before the triggering call returns.

use std::sync::Arc;

use super::cart::Cart;
use super::display::ProductDisplay;
use super::error::CatalogError;
use super::events::{EventChannel, Subscription};
use super::model::{Product, ReviewRecord};
use super::review::{ReviewDraft, ReviewRejection};
use super::shipping::ShippingCost;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// The assembled storefront.
pub struct Storefront {
    display: ProductDisplay,
    cart: Cart,
    premium: bool,
    /// Review topic: the form publishes here, the display's list and any
    /// external observers subscribe.
    review_channel: Arc<EventChannel<ReviewRecord>>,
    /// Cart-change topic for external observers; the cart itself is mutated
    /// directly before publication.
    cart_channel: Arc<EventChannel<super::cart::CartEvent>>,
    telemetry: Box<dyn TelemetrySink>,
}

impl Storefront {
    /// Assembles a storefront for `product`.
    ///
    /// The display's review list is attached to the review channel here;
    /// [`Storefront::teardown`] releases it again.
    ///
    /// # Errors
    ///
    /// Returns the product validation errors of [`ProductDisplay::new`].
    pub fn new(product: Product, premium: bool) -> Result<Self, CatalogError> {
        let review_channel = Arc::new(EventChannel::new());
        let mut display = ProductDisplay::new(product)?;
        display.attach_reviews(&review_channel);

        Ok(Self {
            display,
            cart: Cart::new(),
            premium,
            review_channel,
            cart_channel: Arc::new(EventChannel::new()),
            telemetry: Box::new(NoopTelemetrySink),
        })
    }

    /// Assembles a storefront for the built-in demo product.
    ///
    /// Infallible counterpart of [`Storefront::new`] for callers with no
    /// catalog file.
    #[must_use]
    pub fn demo(premium: bool) -> Self {
        let review_channel = Arc::new(EventChannel::new());
        let mut display = ProductDisplay::demo();
        display.attach_reviews(&review_channel);

        Self {
            display,
            cart: Cart::new(),
            premium,
            review_channel,
            cart_channel: Arc::new(EventChannel::new()),
            telemetry: Box::new(NoopTelemetrySink),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Box<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Returns the product display.
    #[must_use]
    pub const fn display(&self) -> &ProductDisplay {
        &self.display
    }

    /// Returns the cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns whether the shopper has a premium membership.
    #[must_use]
    pub const fn premium(&self) -> bool {
        self.premium
    }

    /// Returns the shipping cost for this shopper.
    #[must_use]
    pub const fn shipping(&self) -> ShippingCost {
        ShippingCost::for_premium(self.premium)
    }

    /// Selects the variant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VariantIndexOutOfRange`] when `index` is not
    /// a valid position in the variant list.
    pub fn select_variant(&mut self, index: usize) -> Result<(), CatalogError> {
        self.display.select_variant(index)
    }

    /// Moves the variant selection one to the right, stopping at the end.
    pub fn select_next_variant(&mut self) {
        self.display.select_next_variant();
    }

    /// Moves the variant selection one to the left, stopping at the start.
    pub const fn select_previous_variant(&mut self) {
        self.display.select_previous_variant();
    }

    /// Adds the selected variant to the cart.
    ///
    /// The cart mutation applies first; cart-change observers then run
    /// synchronously before this call returns.
    pub fn add_to_cart(&mut self) {
        let event = self.display.add_to_cart();
        self.apply_cart_event(event);
    }

    /// Removes the selected variant's first cart occurrence, if any.
    pub fn remove_from_cart(&mut self) {
        let event = self.display.remove_from_cart();
        self.apply_cart_event(event);
    }

    fn apply_cart_event(&mut self, event: super::cart::CartEvent) {
        self.cart.apply(&event);
        tracing::debug!(
            variant_id = event.variant_id,
            action = ?event.action,
            entries = self.cart.len(),
            "cart changed"
        );
        self.telemetry.record(TelemetryEvent::CartChanged {
            action: event.action,
            entry_count: self.cart.len(),
        });
        self.cart_channel.publish(&event);
    }

    /// Submits a review draft.
    ///
    /// On acceptance the record is published on the review channel, which
    /// appends it to the display's review list and notifies any external
    /// observers; the draft is cleared. On rejection nothing is published
    /// and the draft keeps its entered values.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRejection`] with the full validation error list.
    pub fn submit_review(&mut self, draft: &mut ReviewDraft) -> Result<(), ReviewRejection> {
        let record = draft.submit()?;
        tracing::debug!(reviewer = %record.name, rating = record.rating.value(), "review accepted");
        self.telemetry.record(TelemetryEvent::ReviewAccepted {
            rating: record.rating.value(),
        });
        self.review_channel.publish(&record);
        Ok(())
    }

    /// Returns a snapshot of the accepted reviews in arrival order.
    #[must_use]
    pub fn reviews(&self) -> Vec<ReviewRecord> {
        self.display.reviews()
    }

    /// Registers an observer for accepted reviews.
    ///
    /// The callback runs synchronously inside [`Storefront::submit_review`]
    /// for every accepted record, after the display's list has been updated.
    pub fn on_review_added(
        &self,
        handler: impl FnMut(&ReviewRecord) + Send + 'static,
    ) -> Subscription {
        self.review_channel.subscribe(handler)
    }

    /// Removes a review observer. Returns `true` if it was registered.
    pub fn remove_review_observer(&self, subscription: Subscription) -> bool {
        self.review_channel.unsubscribe(subscription)
    }

    /// Registers an observer for cart changes.
    ///
    /// The callback runs synchronously inside the add/remove calls, after
    /// the cart mutation has applied.
    pub fn on_cart_changed(
        &self,
        handler: impl FnMut(&super::cart::CartEvent) + Send + 'static,
    ) -> Subscription {
        self.cart_channel.subscribe(handler)
    }

    /// Removes a cart observer. Returns `true` if it was registered.
    pub fn remove_cart_observer(&self, subscription: Subscription) -> bool {
        self.cart_channel.unsubscribe(subscription)
    }

    /// Releases the display's review subscription.
    ///
    /// After teardown, accepted reviews no longer reach the display's list;
    /// external observers keep their own subscriptions.
    pub fn teardown(&mut self) {
        let channel = Arc::clone(&self.review_channel);
        let _released = self.display.detach_reviews(&channel);
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("display", &self.display)
            .field("cart", &self.cart)
            .field("premium", &self.premium)
            .finish_non_exhaustive()
    }
}
