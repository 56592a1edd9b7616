//! Catalog configuration.

use crate::error::CatalogLoadError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Where the tariff/option catalog document lives.
///
/// Loaded from an optional `catalog` config file and `CATALOG__*`
/// environment variables (e.g. `CATALOG__FILE=/etc/elegance/tariffs.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_file")]
    pub file: String,
}

fn default_file() -> String {
    "tariffs.json".to_string()
}

impl CatalogConfig {
    pub fn load() -> Result<Self, CatalogLoadError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("catalog").required(false))
            .add_source(config::Environment::with_prefix("CATALOG").separator("__"))
            .build()?;

        let config: CatalogConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CatalogLoadError> {
        if self.file.trim().is_empty() {
            return Err(CatalogLoadError::Config(anyhow::anyhow!(
                "catalog file path must not be empty"
            )));
        }
        Ok(())
    }
}
