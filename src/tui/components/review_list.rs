//! Review list panel showing accepted reviews in arrival order.

use crate::catalog::ReviewRecord;

use super::text_wrap::wrap_text;

/// Message shown while no review has been accepted yet.
const EMPTY_STATE: &str = "There are no reviews yet.";

/// Context for rendering the review list panel.
#[derive(Debug, Clone)]
pub struct ReviewListViewContext<'a> {
    /// Accepted reviews, oldest first.
    pub reviews: &'a [ReviewRecord],
    /// Maximum width in columns for wrapping review text.
    pub max_width: usize,
}

/// Component rendering the accepted-reviews panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewListComponent;

impl ReviewListComponent {
    /// Renders the review list, or the empty state when there are none.
    #[must_use]
    pub fn view(ctx: &ReviewListViewContext<'_>) -> String {
        if ctx.reviews.is_empty() {
            return format!("  {EMPTY_STATE}\n");
        }

        let mut output = String::new();
        for review in ctx.reviews {
            output.push_str(&Self::format_review(review, ctx.max_width));
        }
        output
    }

    fn format_review(review: &ReviewRecord, max_width: usize) -> String {
        let header = format!(
            "- {} rated it {}/5 (recommends: {})\n",
            review.name,
            review.rating,
            review.recommend.label()
        );
        let body = wrap_text(&format!("  {}", review.review), max_width);
        format!("{header}{body}\n")
    }
}
