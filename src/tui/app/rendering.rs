//! Rendering logic for the storefront TUI application.
//!
//! View rendering methods producing string output for the terminal. These
//! are pure query methods that read state without modification.

use super::StorefrontApp;
use crate::tui::components::{
    ProductDetailsComponent, ProductDetailsViewContext, ReviewFormComponent, ReviewFormViewContext,
    ReviewListComponent, ReviewListViewContext, ShippingInfoComponent, ShippingInfoViewContext,
    VariantListComponent, VariantListViewContext,
};
use crate::tui::state::ProductTab;

impl StorefrontApp {
    /// Renders the header: title, sale banner, stock line, and cart count.
    pub(super) fn render_header(&self) -> String {
        let display = self.storefront.display();
        let title = display
            .sale_message()
            .map_or_else(|| display.title(), |message| message);
        let cart_count = self.storefront.cart().len();

        let stock = if display.in_stock() {
            format!("In stock ({})", display.stock_quantity())
        } else {
            "Out of stock".to_owned()
        };

        format!("{title}  |  Cart: {cart_count}\n{stock}\n")
    }

    /// Renders the variant selection row.
    pub(super) fn render_variant_row(&self) -> String {
        let display = self.storefront.display();
        let ctx = VariantListViewContext {
            variants: &display.product().variants,
            selected_index: display.selected_index(),
        };
        VariantListComponent::view(&ctx)
    }

    /// Renders the tab bar with the active tab bracketed.
    pub(super) fn render_tab_bar(&self) -> String {
        let labels: Vec<String> = ProductTab::ALL
            .iter()
            .map(|tab| {
                if *tab == self.active_tab {
                    format!("[{}]", tab.label())
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect();
        format!("{}\n", labels.join(" "))
    }

    /// Renders the active tab's panel. Inactive panels keep their state but
    /// produce no output.
    pub(super) fn render_active_panel(&self) -> String {
        match self.active_tab {
            ProductTab::Reviews => {
                let reviews = self.storefront.reviews();
                let ctx = ReviewListViewContext {
                    reviews: &reviews,
                    max_width: 80.min(self.panel_width()),
                };
                clip_to_height(&ReviewListComponent::view(&ctx), self.panel_height())
            }
            ProductTab::MakeReview => {
                ReviewFormComponent::view(&ReviewFormViewContext { form: &self.form })
            }
            ProductTab::Shipping => ShippingInfoComponent::view(&ShippingInfoViewContext {
                cost: self.storefront.shipping(),
            }),
            ProductTab::Details => {
                ProductDetailsComponent::view(&ProductDetailsViewContext {
                    details: &self.storefront.display().product().details,
                })
            }
        }
    }

    /// Renders the status bar: a transient message if present, otherwise
    /// context-sensitive key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(status) = &self.status {
            return format!("{status}\n");
        }
        format!("{}\n", self.status_hints())
    }

    fn status_hints(&self) -> &'static str {
        if matches!(self.active_tab, ProductTab::MakeReview) {
            return "type:edit  Up/Down:field  Backspace:delete  Enter:submit  Esc:back";
        }
        if self.storefront.display().in_stock() {
            "h/l:variant  a:add  r:remove  Tab:tabs  1-4:tab  ?:help  q:quit"
        } else {
            // Out of stock: the cart hints are greyed out of the hint line.
            "h/l:variant  (out of stock)  Tab:tabs  1-4:tab  ?:help  q:quit"
        }
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Browsing:
  h, Left    Previous variant
  l, Right   Next variant
  a          Add selected variant to cart
  r          Remove selected variant from cart
  Tab        Next tab
  Shift-Tab  Previous tab
  1-4        Jump to tab
  ?          Toggle this help
  q          Quit

Review form (Make a Review tab):
  text keys  Edit the focused field
  Backspace  Delete / clear the focused field
  Up/Down    Move field focus
  Enter      Submit the review
  Esc        Back to the Reviews tab

Press ? to close this help.
";
        help_text.to_owned()
    }

    fn panel_width(&self) -> usize {
        usize::from(self.width)
    }

    /// Lines left for the panel after the surrounding chrome.
    ///
    /// Chrome: two header lines, the variant rows, the tab bar, two blank
    /// separators, and the status bar.
    fn panel_height(&self) -> usize {
        let variant_rows = self.storefront.display().product().variants.len();
        usize::from(self.height).saturating_sub(6 + variant_rows)
    }
}

/// Truncates rendered output to at most `max_lines` lines.
fn clip_to_height(text: &str, max_lines: usize) -> String {
    if max_lines == 0 {
        return String::new();
    }
    let mut output: String = text
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    output
}
