//! Shared builders for unit and behavioural tests.

use super::model::{Product, Rating, Recommendation, ReviewRecord};
use super::review::ReviewDraft;
use super::storefront::Storefront;

/// Builds an accepted-shape review record for `name`.
///
/// # Panics
///
/// Panics if the fixed rating is out of range, which cannot happen.
#[must_use]
pub fn review_record(name: &str) -> ReviewRecord {
    ReviewRecord {
        name: name.to_owned(),
        review: "Great socks".to_owned(),
        rating: Rating::new(4).unwrap_or_else(|error| panic!("rating invalid: {error}")),
        recommend: Recommendation::Yes,
    }
}

/// Builds a draft that passes validation.
#[must_use]
pub fn filled_draft(name: &str, review: &str) -> ReviewDraft {
    let mut draft = ReviewDraft::new();
    for character in name.chars() {
        draft.push_name_char(character);
    }
    for character in review.chars() {
        draft.push_review_char(character);
    }
    if let Ok(rating) = Rating::new(4) {
        draft.set_rating(rating);
    }
    draft.set_recommend(Recommendation::Yes);
    draft
}

/// Builds a storefront for the demo product.
///
/// # Panics
///
/// Panics if the demo product fails validation, which cannot happen.
#[must_use]
pub fn demo_storefront(premium: bool) -> Storefront {
    Storefront::new(Product::demo(), premium)
        .unwrap_or_else(|error| panic!("demo product must be valid: {error}"))
}
