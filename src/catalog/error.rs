//! Error types exposed by the catalog layer.

use thiserror::Error;

/// Errors surfaced while loading a catalog or mutating storefront state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A variant selection index fell outside the variant list.
    #[error("variant index {index} is out of range (product has {count} variants)")]
    VariantIndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// Number of variants in the product.
        count: usize,
    },

    /// A product was defined without any purchasable variants.
    ///
    /// The default selection is index 0, so an empty variant list can never
    /// satisfy the selected-variant invariant.
    #[error("product '{product}' has no variants")]
    EmptyVariantList {
        /// Product name from the offending definition.
        product: String,
    },

    /// Two variants in one product share an identifier.
    #[error("duplicate variant id {id} in product '{product}'")]
    DuplicateVariantId {
        /// The repeated variant identifier.
        id: u32,
        /// Product name from the offending definition.
        product: String,
    },

    /// A rating value fell outside the 1-5 scale.
    #[error("rating must be between 1 and 5, got {value}")]
    RatingOutOfRange {
        /// The rejected raw value.
        value: u8,
    },

    /// A catalog file could not be read or parsed.
    #[error("catalog file '{path}' could not be loaded: {message}")]
    CatalogFile {
        /// Path the loader attempted to read.
        path: String,
        /// Detail from the underlying I/O or parse failure.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal UI failed to initialise or run.
    #[error("terminal UI error: {message}")]
    Terminal {
        /// Detail from the TUI runtime.
        message: String,
    },
}

/// A single review-form validation failure.
///
/// The `Display` strings are part of the behavioural contract: rejected
/// submissions surface exactly these messages, in field order (name, review,
/// rating, recommendation).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The name field was empty.
    #[error("Name is required")]
    NameRequired,
    /// The review text field was empty.
    #[error("Review is required")]
    ReviewRequired,
    /// No rating was chosen.
    #[error("Rating is required")]
    RatingRequired,
    /// No recommendation was chosen.
    #[error("Recommendation is required")]
    RecommendationRequired,
}
