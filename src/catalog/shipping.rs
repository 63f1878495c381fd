//! Shipping cost as a pure function of premium membership.

use std::fmt;

/// The shipping cost for an order: free for premium members, a flat 2.99
/// charge otherwise.
///
/// The charge is carried in cents so no floating-point value exists
/// anywhere in the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingCost {
    /// Premium members ship free.
    Free,
    /// Everyone else pays the flat standard rate.
    Standard,
}

/// Flat standard shipping charge, in cents.
const STANDARD_CHARGE_CENTS: u32 = 299;

impl ShippingCost {
    /// Maps a premium membership flag to its shipping cost.
    ///
    /// Total over its two-value domain; no state, no side effects.
    #[must_use]
    pub const fn for_premium(premium: bool) -> Self {
        if premium { Self::Free } else { Self::Standard }
    }

    /// Returns the charge in cents.
    #[must_use]
    pub const fn charge_cents(self) -> u32 {
        match self {
            Self::Free => 0,
            Self::Standard => STANDARD_CHARGE_CENTS,
        }
    }

    /// Returns the display label: `"Free"` or `"2.99"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Standard => "2.99",
        }
    }
}

impl fmt::Display for ShippingCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
