//! Tab selection state for the product panel.

/// The four panels of the product tab bar.
///
/// All panels stay mounted while another tab is active: switching tabs never
/// discards panel state, so an in-progress review draft survives a detour
/// through the other tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductTab {
    /// Accepted reviews, in arrival order.
    #[default]
    Reviews,
    /// The review submission form.
    MakeReview,
    /// Shipping cost for the current shopper.
    Shipping,
    /// The product details list.
    Details,
}

impl ProductTab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::Reviews, Self::MakeReview, Self::Shipping, Self::Details];

    /// Returns the tab's display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::MakeReview => "Make a Review",
            Self::Shipping => "Shipping",
            Self::Details => "Details",
        }
    }

    /// Returns the next tab in display order, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Reviews => Self::MakeReview,
            Self::MakeReview => Self::Shipping,
            Self::Shipping => Self::Details,
            Self::Details => Self::Reviews,
        }
    }

    /// Returns the previous tab in display order, wrapping at the start.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Reviews => Self::Details,
            Self::MakeReview => Self::Reviews,
            Self::Shipping => Self::MakeReview,
            Self::Details => Self::Shipping,
        }
    }

    /// Maps a digit key (`'1'` to `'4'`) to its tab.
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Reviews),
            '2' => Some(Self::MakeReview),
            '3' => Some(Self::Shipping),
            '4' => Some(Self::Details),
            _ => None,
        }
    }
}
