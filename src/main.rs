//! Vitrine CLI entrypoint for the product storefront demo.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use vitrine::catalog::CatalogError;
use vitrine::{OperationMode, VitrineConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::Summary => cli::summary::run(&config),
        OperationMode::Tui => cli::storefront_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<VitrineConfig, CatalogError> {
    VitrineConfig::load().map_err(|error| CatalogError::Configuration {
        message: error.to_string(),
    })
}
