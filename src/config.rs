//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.vitrine.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `VITRINE_PREMIUM`, `VITRINE_CATALOG`,
//!    `VITRINE_SUMMARY`
//! 4. **Command-line arguments** – `--premium`/`-p`, `--catalog`/`-c`,
//!    `--summary`/`-s`
//!
//! # Configuration File
//!
//! Place `.vitrine.toml` in the current directory, home directory, or XDG
//! config directory with:
//!
//! ```toml
//! premium = true
//! catalog = "catalog.json"
//! ```

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, Product};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive storefront TUI.
    Tui,
    /// Non-interactive product summary on stdout.
    Summary,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `VITRINE_PREMIUM` or `--premium`: Premium membership (free shipping)
/// - `VITRINE_CATALOG` or `--catalog`: Path to a JSON catalog file
/// - `VITRINE_SUMMARY` or `--summary`: Print a summary instead of the TUI
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use vitrine::VitrineConfig;
///
/// let config = VitrineConfig::load().expect("failed to load configuration");
/// let product = config.load_product().expect("catalog must parse");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "VITRINE",
    discovery(
        dotfile_name = ".vitrine.toml",
        config_file_name = "vitrine.toml",
        app_name = "vitrine"
    )
)]
pub struct VitrineConfig {
    /// Whether the shopper has a premium membership (free shipping).
    ///
    /// Can be provided via:
    /// - CLI: `--premium` or `-p`
    /// - Environment: `VITRINE_PREMIUM`
    /// - Config file: `premium = true`
    #[ortho_config(cli_short = 'p', cli_default_as_absent)]
    pub premium: bool,

    /// Path to a JSON catalog file defining the product.
    ///
    /// When absent, the built-in demo product is used.
    ///
    /// Can be provided via:
    /// - CLI: `--catalog <PATH>` or `-c <PATH>`
    /// - Environment: `VITRINE_CATALOG`
    /// - Config file: `catalog = "..."`
    #[ortho_config(cli_short = 'c')]
    pub catalog: Option<Utf8PathBuf>,

    /// Prints a product summary to stdout and exits instead of starting
    /// the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` or `-s`
    /// - Environment: `VITRINE_SUMMARY`
    /// - Config file: `summary = true`
    #[ortho_config(cli_short = 's', cli_default_as_absent)]
    pub summary: bool,
}

impl VitrineConfig {
    /// Determines the operation mode from the loaded flags.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else {
            OperationMode::Tui
        }
    }

    /// Loads the configured product: the catalog file when one is set,
    /// the demo product otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CatalogFile`] when the file cannot be read
    /// or parsed, and the validation errors of [`Product::validate`] when
    /// its contents are inconsistent.
    pub fn load_product(&self) -> Result<Product, CatalogError> {
        self.catalog
            .as_deref()
            .map_or_else(|| Ok(Product::demo()), Product::load_from_path)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ortho_config::OrthoConfig;
    use rstest::rstest;

    use super::{OperationMode, VitrineConfig};

    #[rstest]
    #[case(false, OperationMode::Tui)]
    #[case(true, OperationMode::Summary)]
    fn summary_flag_selects_the_mode(#[case] summary: bool, #[case] expected: OperationMode) {
        let config = VitrineConfig {
            summary,
            ..VitrineConfig::default()
        };
        assert_eq!(config.operation_mode(), expected);
    }

    #[test]
    fn missing_catalog_path_falls_back_to_the_demo_product() {
        let config = VitrineConfig::default();
        let product = config
            .load_product()
            .unwrap_or_else(|error| panic!("demo product must load: {error}"));
        assert_eq!(product.name, "Wool Socks");
    }

    #[test]
    fn catalog_path_loads_the_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            r#"{{
                "brand": "Acme",
                "name": "Boots",
                "on_sale": false,
                "details": ["Leather"],
                "variants": [
                    {{"id": 7, "color": "Brown", "image_ref": "boots.jpg", "stock_quantity": 3}}
                ]
            }}"#
        )
        .expect("write catalog");

        let path = camino::Utf8PathBuf::from_path_buf(file.path().to_path_buf())
            .unwrap_or_else(|path| panic!("temp path not UTF-8: {}", path.display()));
        let config = VitrineConfig {
            catalog: Some(path),
            ..VitrineConfig::default()
        };

        let product = config
            .load_product()
            .unwrap_or_else(|error| panic!("catalog must parse: {error}"));
        assert_eq!(product.title(), "Acme Boots");
    }

    /// Loads configuration with the given environment and CLI layers under
    /// an isolated home directory.
    fn load_with_layers(env_premium: Option<&str>, cli_args: &[&str]) -> VitrineConfig {
        let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
        let home = temp_dir.path().to_string_lossy().to_string();

        let _guard = env_lock::lock_env([
            ("VITRINE_PREMIUM", env_premium),
            ("VITRINE_CATALOG", None),
            ("VITRINE_SUMMARY", None),
            ("HOME", Some(home.as_str())),
            ("XDG_CONFIG_HOME", Some(home.as_str())),
        ]);

        let mut args: Vec<std::ffi::OsString> = vec![std::ffi::OsString::from("vitrine")];
        args.extend(cli_args.iter().map(std::ffi::OsString::from));

        VitrineConfig::load_from_iter(args).expect("config should load")
    }

    #[rstest]
    #[case::defaults(None, &[], false)]
    #[case::environment(Some("true"), &[], true)]
    #[case::cli(None, &["--premium"], true)]
    #[case::cli_overrides_environment(Some("false"), &["--premium"], true)]
    fn premium_flag_resolves_across_layers(
        #[case] env_premium: Option<&str>,
        #[case] cli_args: &[&str],
        #[case] expected: bool,
    ) {
        let config = load_with_layers(env_premium, cli_args);
        assert_eq!(config.premium, expected);
    }

    #[test]
    fn unreadable_catalog_path_is_a_typed_error() {
        let config = VitrineConfig {
            catalog: Some(camino::Utf8PathBuf::from("/nonexistent/catalog.json")),
            ..VitrineConfig::default()
        };
        assert!(config.load_product().is_err());
    }
}
