//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use catalog_core::catalog::SortKey;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog startup configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Interactive shell configuration.
    #[serde(default)]
    pub shell: ShellConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Catalog startup settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Seed fixture (JSON array or TOML `[[products]]`). Built-in seed when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<String>,

    /// Sort applied once the catalog is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortKey>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, overridden by `RUST_LOG`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Interactive shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Ask before deleting a product.
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            confirm_delete: true,
        }
    }
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Generate a default catalog.toml config file.
pub fn generate_default_config() -> String {
    r#"# Product catalog configuration

[catalog]
# seed_file = "products.json"
# default_sort = "price"

[log]
filter = "warn"

[shell]
confirm_delete = true
"#
    .to_string()
}
