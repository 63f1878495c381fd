//! Data models for products, variants, ratings, and accepted reviews.
//!
//! Catalog data is statically defined at startup: a [`Product`] and its
//! [`Variant`] list are never mutated after construction. Products come from
//! either the built-in demo fixture or a JSON catalog file.

use std::fmt;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// One purchasable configuration of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Identifier, unique within the owning product.
    pub id: u32,
    /// Display colour for the swatch.
    pub color: String,
    /// Reference to the variant image asset.
    pub image_ref: String,
    /// Units in stock; zero means out of stock.
    pub stock_quantity: u32,
}

impl Variant {
    /// Returns whether any units are in stock.
    ///
    /// Any positive quantity counts as in stock; the quantity itself carries
    /// no further display meaning.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

/// A product definition: branding, sale flag, details, and variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Brand name, prefixed to the product name in the display title.
    pub brand: String,
    /// Product name.
    pub name: String,
    /// Whether the sale banner is shown. Fixed at definition time.
    #[serde(default)]
    pub on_sale: bool,
    /// Ordered free-text attributes shown on the details panel.
    #[serde(default)]
    pub details: Vec<String>,
    /// Purchasable variants; list order defines the default selection.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Returns the built-in demo product used when no catalog file is given.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            brand: "Vitrine".to_owned(),
            name: "Wool Socks".to_owned(),
            on_sale: true,
            details: vec![
                "80% Cotton".to_owned(),
                "20% Polyester".to_owned(),
                "Gender-neutral".to_owned(),
            ],
            variants: vec![
                Variant {
                    id: 1,
                    color: "Green".to_owned(),
                    image_ref: "assets/socks-green.jpg".to_owned(),
                    stock_quantity: 10,
                },
                Variant {
                    id: 2,
                    color: "Blue".to_owned(),
                    image_ref: "assets/socks-blue.jpg".to_owned(),
                    stock_quantity: 0,
                },
            ],
        }
    }

    /// Loads and validates a product definition from a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogFile`] when the file cannot be read or
    /// parsed, and the validation errors from [`Product::validate`] when the
    /// parsed definition is inconsistent.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|error| CatalogError::CatalogFile {
            path: path.to_string(),
            message: error.to_string(),
        })?;
        let product: Self =
            serde_json::from_str(&raw).map_err(|error| CatalogError::CatalogFile {
                path: path.to_string(),
                message: error.to_string(),
            })?;
        product.validate()?;
        tracing::debug!(
            product = %product.name,
            variants = product.variants.len(),
            "loaded catalog file"
        );
        Ok(product)
    }

    /// Checks the structural invariants of a product definition.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyVariantList`] when no variants are
    /// defined, or [`CatalogError::DuplicateVariantId`] when two variants
    /// share an id.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.variants.is_empty() {
            return Err(CatalogError::EmptyVariantList {
                product: self.name.clone(),
            });
        }

        let mut seen = Vec::with_capacity(self.variants.len());
        for variant in &self.variants {
            if seen.contains(&variant.id) {
                return Err(CatalogError::DuplicateVariantId {
                    id: variant.id,
                    product: self.name.clone(),
                });
            }
            seen.push(variant.id);
        }

        Ok(())
    }

    /// Returns the display title, `"{brand} {name}"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }
}

/// A review rating on the fixed 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating, rejecting values outside 1-5.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::RatingOutOfRange`] for 0 or values above 5.
    pub const fn new(value: u8) -> Result<Self, CatalogError> {
        if matches!(value, 1..=5) {
            Ok(Self(value))
        } else {
            Err(CatalogError::RatingOutOfRange { value })
        }
    }

    /// Returns the raw 1-5 value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A yes/no product recommendation.
///
/// Serialised as the strings `"true"` and `"false"` in catalog and review
/// JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// The reviewer recommends the product.
    #[serde(rename = "true")]
    Yes,
    /// The reviewer does not recommend the product.
    #[serde(rename = "false")]
    No,
}

impl Recommendation {
    /// Returns the wire representation, `"true"` or `"false"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "true",
            Self::No => "false",
        }
    }

    /// Returns a human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An accepted, validated user review.
///
/// Created only by a successful submission; immutable once published and
/// never removed from the review list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Reviewer name; never empty.
    pub name: String,
    /// Free-text review body; never empty.
    pub review: String,
    /// Rating on the 1-5 scale.
    pub rating: Rating,
    /// Whether the reviewer recommends the product.
    pub recommend: Recommendation,
}
