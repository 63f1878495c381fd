//! Variant swatch row showing the selectable colour variants.

use crate::catalog::Variant;

/// Context for rendering the variant row.
#[derive(Debug, Clone)]
pub struct VariantListViewContext<'a> {
    /// The product's variants, in definition order.
    pub variants: &'a [Variant],
    /// Index of the selected variant.
    pub selected_index: usize,
}

/// Component rendering the variant selection row.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantListComponent;

impl VariantListComponent {
    /// Renders one line per variant with the selected one marked.
    #[must_use]
    pub fn view(ctx: &VariantListViewContext<'_>) -> String {
        let mut output = String::new();
        for (index, variant) in ctx.variants.iter().enumerate() {
            let marker = if index == ctx.selected_index { ">" } else { " " };
            let stock = if variant.in_stock() {
                format!("{} in stock", variant.stock_quantity)
            } else {
                "out of stock".to_owned()
            };
            output.push_str(&format!("{marker} [{}] ({stock})\n", variant.color));
        }
        output
    }
}
