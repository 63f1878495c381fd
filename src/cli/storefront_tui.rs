//! TUI mode for browsing the product storefront.
//!
//! This module provides the entry point for the interactive terminal user
//! interface: variant selection, cart, tab panel, and the review form.

use std::io::{self, Write};

use bubbletea_rs::Program;

use vitrine::VitrineConfig;
use vitrine::catalog::{CatalogError, Storefront};
use vitrine::telemetry::StderrJsonlTelemetrySink;
use vitrine::tui::{StorefrontApp, set_initial_storefront};

/// Runs the TUI mode.
///
/// # Errors
///
/// Returns an error if:
/// - The catalog file cannot be read or parsed
/// - The product fails validation
/// - The TUI fails to initialise
pub async fn run(config: &VitrineConfig) -> Result<(), CatalogError> {
    let product = config.load_product()?;
    let storefront = Storefront::new(product, config.premium)?
        .with_telemetry(Box::new(StderrJsonlTelemetrySink));

    // Stage the storefront for Model::init() to take. If one is already
    // staged (e.g. re-running the TUI in the same process), it is kept.
    let _already_staged = set_initial_storefront(storefront);

    run_tui().await.map_err(|error| CatalogError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `StorefrontApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<StorefrontApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}
