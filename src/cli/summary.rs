//! Non-interactive summary mode.
//!
//! Prints the configured product's headline values to stdout and exits,
//! for scripting and smoke-testing without a terminal UI.

use std::io::{self, Write};

use vitrine::VitrineConfig;
use vitrine::catalog::{CatalogError, Storefront};

/// Runs the summary mode.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded, the product
/// fails validation, or stdout cannot be written.
pub fn run(config: &VitrineConfig) -> Result<(), CatalogError> {
    let product = config.load_product()?;
    let storefront = Storefront::new(product, config.premium)?;

    write_summary(&storefront)
}

fn write_summary(storefront: &Storefront) -> Result<(), CatalogError> {
    let display = storefront.display();
    let mut stdout = io::stdout().lock();

    let mut message = String::new();
    message.push_str(&display.title());
    if let Some(sale) = display.sale_message() {
        message.push_str(&format!("\n{sale}"));
    }

    for variant in &display.product().variants {
        let stock = if variant.in_stock() {
            format!("{} in stock", variant.stock_quantity)
        } else {
            "out of stock".to_owned()
        };
        message.push_str(&format!("\n  {}: {stock}", variant.color));
    }

    message.push_str(&format!("\nShipping: {}", storefront.shipping().label()));

    writeln!(stdout, "{message}").map_err(|error| CatalogError::Io {
        message: error.to_string(),
    })
}
