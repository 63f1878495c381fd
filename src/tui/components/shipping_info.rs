//! Shipping cost panel.

use crate::catalog::ShippingCost;

/// Context for rendering the shipping panel.
#[derive(Debug, Clone, Copy)]
pub struct ShippingInfoViewContext {
    /// Shipping cost for the current shopper.
    pub cost: ShippingCost,
}

/// Component rendering the shipping panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingInfoComponent;

impl ShippingInfoComponent {
    /// Renders the shipping line.
    #[must_use]
    pub fn view(ctx: &ShippingInfoViewContext) -> String {
        format!("  Shipping: {}\n", ctx.cost.label())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ShippingInfoComponent, ShippingInfoViewContext};
    use crate::catalog::ShippingCost;

    #[rstest]
    #[case(ShippingCost::Free, "  Shipping: Free\n")]
    #[case(ShippingCost::Standard, "  Shipping: 2.99\n")]
    fn renders_the_cost_label(#[case] cost: ShippingCost, #[case] expected: &str) {
        assert_eq!(
            ShippingInfoComponent::view(&ShippingInfoViewContext { cost }),
            expected
        );
    }
}
