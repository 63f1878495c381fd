//! Product display state: variant selection, derived values, review list.
//!
//! The display owns the selected-variant index and the review list, and it
//! derives every display value (title, image, stock status, sale message)
//! on read rather than caching it. Cart state lives with the top-level
//! owner; the display only emits [`CartEvent`]s for it.

use std::sync::{Arc, Mutex};

use super::cart::{CartAction, CartEvent};
use super::error::CatalogError;
use super::events::{EventChannel, Subscription};
use super::model::{Product, ReviewRecord, Variant};

/// Display state for one product.
#[derive(Debug)]
pub struct ProductDisplay {
    product: Product,
    /// Invariant: always a valid index into `product.variants`.
    selected: usize,
    /// Shared with the review-channel subscription closure, which appends
    /// accepted reviews in arrival order.
    reviews: Arc<Mutex<Vec<ReviewRecord>>>,
    review_subscription: Option<Subscription>,
}

/// Locks a review list, recovering from a poisoned lock.
fn locked(reviews: &Arc<Mutex<Vec<ReviewRecord>>>) -> std::sync::MutexGuard<'_, Vec<ReviewRecord>> {
    match reviews.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl ProductDisplay {
    /// Creates a display for `product` with the first variant selected.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Product::validate`]; in particular a product
    /// without variants is rejected because no default selection exists.
    pub fn new(product: Product) -> Result<Self, CatalogError> {
        product.validate()?;
        Ok(Self {
            product,
            selected: 0,
            reviews: Arc::new(Mutex::new(Vec::new())),
            review_subscription: None,
        })
    }

    /// Creates a display for the built-in demo product.
    ///
    /// Infallible: the demo product upholds the construction invariants.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            product: Product::demo(),
            selected: 0,
            reviews: Arc::new(Mutex::new(Vec::new())),
            review_subscription: None,
        }
    }

    /// Returns the product definition.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Selects the variant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VariantIndexOutOfRange`] when `index` is not
    /// a valid position in the variant list; the selection is unchanged.
    pub fn select_variant(&mut self, index: usize) -> Result<(), CatalogError> {
        if index >= self.product.variants.len() {
            return Err(CatalogError::VariantIndexOutOfRange {
                index,
                count: self.product.variants.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    /// Moves the selection to the next variant, stopping at the last.
    pub fn select_next_variant(&mut self) {
        let last = self.product.variants.len().saturating_sub(1);
        if self.selected < last {
            self.selected = self.selected.saturating_add(1);
        }
    }

    /// Moves the selection to the previous variant, stopping at the first.
    pub const fn select_previous_variant(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Returns the selected zero-based variant index.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the selected variant.
    ///
    /// `None` cannot occur in practice: construction rejects empty variant
    /// lists and [`ProductDisplay::select_variant`] rejects out-of-range
    /// indices.
    #[must_use]
    pub fn selected_variant(&self) -> Option<&Variant> {
        self.product.variants.get(self.selected)
    }

    /// Returns the display title, `"{brand} {name}"`.
    #[must_use]
    pub fn title(&self) -> String {
        self.product.title()
    }

    /// Returns the selected variant's image reference.
    #[must_use]
    pub fn image_ref(&self) -> &str {
        self.selected_variant().map_or("", |variant| variant.image_ref.as_str())
    }

    /// Returns whether the selected variant has any stock.
    ///
    /// Any positive quantity counts as in stock; use
    /// [`ProductDisplay::stock_quantity`] for the raw number.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.selected_variant().is_some_and(Variant::in_stock)
    }

    /// Returns the selected variant's raw stock quantity.
    #[must_use]
    pub fn stock_quantity(&self) -> u32 {
        self.selected_variant().map_or(0, |variant| variant.stock_quantity)
    }

    /// Returns the sale banner while the product's sale flag is set.
    #[must_use]
    pub fn sale_message(&self) -> Option<String> {
        self.product
            .on_sale
            .then(|| format!("{} - on sale!", self.product.title()))
    }

    /// Builds an add-to-cart event for the selected variant.
    ///
    /// The display holds no cart state; the owner applies the event.
    #[must_use]
    pub fn add_to_cart(&self) -> CartEvent {
        self.cart_event(CartAction::Add)
    }

    /// Builds a remove-from-cart event for the selected variant.
    #[must_use]
    pub fn remove_from_cart(&self) -> CartEvent {
        self.cart_event(CartAction::Remove)
    }

    fn cart_event(&self, action: CartAction) -> CartEvent {
        CartEvent {
            variant_id: self.selected_variant().map_or(0, |variant| variant.id),
            action,
        }
    }

    /// Subscribes the review list to `channel`, appending each published
    /// record in arrival order.
    ///
    /// Replaces any previous attachment to the same channel; call
    /// [`ProductDisplay::detach_reviews`] on teardown to release it.
    pub fn attach_reviews(&mut self, channel: &EventChannel<ReviewRecord>) {
        let reviews = Arc::clone(&self.reviews);
        let subscription = channel.subscribe(move |record: &ReviewRecord| {
            tracing::debug!(reviewer = %record.name, "appending accepted review");
            locked(&reviews).push(record.clone());
        });
        self.review_subscription = Some(subscription);
    }

    /// Releases the review subscription taken by
    /// [`ProductDisplay::attach_reviews`].
    ///
    /// Returns `true` when a live subscription was removed.
    pub fn detach_reviews(&mut self, channel: &EventChannel<ReviewRecord>) -> bool {
        self.review_subscription
            .take()
            .is_some_and(|subscription| channel.unsubscribe(subscription))
    }

    /// Returns a snapshot of the review list in arrival order.
    #[must_use]
    pub fn reviews(&self) -> Vec<ReviewRecord> {
        locked(&self.reviews).clone()
    }

    /// Returns the number of accepted reviews.
    #[must_use]
    pub fn review_count(&self) -> usize {
        locked(&self.reviews).len()
    }
}
