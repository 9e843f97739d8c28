//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use catalog_core::catalog::{seed, CatalogStore, Product};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{is_json, CliConfig};
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Seed fixture from `--seed`, preferred over the configured one.
    pub seed: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, seed: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(Path::new(path))?,
            None => Self::find_config(&cwd).unwrap_or_default(),
        };

        Ok(Self {
            config,
            output,
            cwd,
            seed,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(&config_path) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Build the catalog this invocation works on.
    pub fn build_store(&self) -> Result<CatalogStore> {
        let seed_file = self
            .seed
            .as_deref()
            .or(self.config.catalog.seed_file.as_deref());

        let mut store = match seed_file {
            Some(path) => {
                let path = self.resolve_path(path);
                let products = load_seed(&path)?;
                info!(path = %path.display(), len = products.len(), "loaded seed fixture");
                CatalogStore::new(products)
                    .with_context(|| format!("Invalid seed fixture: {}", path.display()))?
            }
            None => {
                debug!("using built-in seed");
                CatalogStore::with_default_seed()
            }
        };

        if let Some(key) = self.config.catalog.default_sort {
            store.sort_by(key);
        }
        Ok(store)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        }
    }
}

#[derive(Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<Product>,
}

/// Read a seed fixture: a JSON array, or TOML `[[products]]` tables.
pub fn load_seed(path: &Path) -> Result<Vec<Product>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    if is_json(path) {
        seed::from_json(&content)
            .with_context(|| format!("Failed to parse JSON seed: {}", path.display()))
    } else {
        let file: SeedFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML seed: {}", path.display()))?;
        Ok(file.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::catalog::SortKey;
    use catalog_core::ProductId;

    fn context_in(dir: &Path, config: CliConfig) -> Context {
        Context {
            config,
            output: Output::new(false, false),
            cwd: dir.to_path_buf(),
            seed: None,
        }
    }

    #[test]
    fn test_default_store_uses_builtin_seed() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_in(dir.path(), CliConfig::default());
        let store = ctx.build_store().unwrap();
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_json_seed_with_default_sort() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("products.json"),
            r#"[
                {"id": 1, "name": "Kettle", "price": 30},
                {"id": 2, "name": "Cup", "price": 2.5}
            ]"#,
        )
        .unwrap();

        let mut config = CliConfig::default();
        config.catalog.seed_file = Some("products.json".to_string());
        config.catalog.default_sort = Some(SortKey::Price);

        let store = context_in(dir.path(), config).build_store().unwrap();
        assert_eq!(store.ids(), vec![ProductId::new(2), ProductId::new(1)]);
        assert_eq!(store.active_sort(), Some(SortKey::Price));
    }

    #[test]
    fn test_toml_seed_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.toml");
        std::fs::write(
            &path,
            r#"
            [[products]]
            id = 7
            name = "Lamp"
            category = "Home"
            price = 25.0
            "#,
        )
        .unwrap();

        let mut config = CliConfig::default();
        config.catalog.seed_file = Some("missing.json".to_string());
        let mut ctx = context_in(dir.path(), config);
        ctx.seed = Some(path.display().to_string());
        let store = ctx.build_store().unwrap();
        assert_eq!(store.get(ProductId::new(7)).unwrap().category, "Home");
    }

    #[test]
    fn test_seed_with_duplicate_ids_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("dupes.json"),
            r#"[{"id": 1, "name": "A", "price": 1}, {"id": 1, "name": "B", "price": 2}]"#,
        )
        .unwrap();

        let mut ctx = context_in(dir.path(), CliConfig::default());
        ctx.seed = Some("dupes.json".to_string());
        let err = ctx.build_store().unwrap_err();
        assert!(format!("{err:#}").contains("already in use"));
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("catalog.toml"), "[log]\nfilter = \"info\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap();
        assert_eq!(config.log.filter, "info");
    }
}
