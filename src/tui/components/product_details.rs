//! Product details panel: an ordered bullet list of caller-supplied strings.

/// Context for rendering the details panel.
#[derive(Debug, Clone)]
pub struct ProductDetailsViewContext<'a> {
    /// Detail lines in definition order.
    pub details: &'a [String],
}

/// Component rendering the product details panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductDetailsComponent;

impl ProductDetailsComponent {
    /// Renders one bullet per detail, preserving order.
    #[must_use]
    pub fn view(ctx: &ProductDetailsViewContext<'_>) -> String {
        let mut output = String::new();
        for detail in ctx.details {
            output.push_str(&format!("  - {detail}\n"));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::{ProductDetailsComponent, ProductDetailsViewContext};
    use crate::catalog::Product;

    #[test]
    fn details_render_in_definition_order() {
        let product = Product::demo();
        let output = ProductDetailsComponent::view(&ProductDetailsViewContext {
            details: &product.details,
        });

        let cotton = output.find("80% Cotton");
        let polyester = output.find("20% Polyester");
        assert!(cotton < polyester, "order preserved: {output}");
        assert_eq!(output.lines().count(), product.details.len());
    }
}
