//! UI components for the storefront TUI.
//!
//! Each component is a stateless view over a context struct borrowed from
//! the application model; the model owns all state and the components only
//! render it.

mod product_details;
mod review_form;
mod review_list;
mod shipping_info;
mod text_wrap;
mod variant_list;

pub use product_details::{ProductDetailsComponent, ProductDetailsViewContext};
pub use review_form::{ReviewFormComponent, ReviewFormViewContext};
pub use review_list::{ReviewListComponent, ReviewListViewContext};
pub use shipping_info::{ShippingInfoComponent, ShippingInfoViewContext};
pub use text_wrap::wrap_text;
pub use variant_list::{VariantListComponent, VariantListViewContext};
