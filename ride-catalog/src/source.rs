//! Catalog sources: where tariff bands and ride options come from.

use crate::error::CatalogLoadError;
use async_trait::async_trait;
use ride_core::models::{OptionCatalog, RideOption, TariffBand, TariffCatalog};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Everything a pricing calculation needs, resolved at one instant.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub tariffs: TariffCatalog,
    pub options: OptionCatalog,
    pub minimum_fare: Decimal,
}

/// Raw on-disk catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub minimum_fare: Decimal,
    pub tariffs: Vec<TariffBand>,
    #[serde(default)]
    pub options: Vec<RideOption>,
}

impl CatalogFile {
    /// Validate the raw document into a usable snapshot.
    pub fn into_snapshot(self) -> Result<CatalogSnapshot, CatalogLoadError> {
        Ok(CatalogSnapshot {
            tariffs: TariffCatalog::new(self.tariffs)?,
            options: OptionCatalog::new(self.options)?,
            minimum_fare: self.minimum_fare,
        })
    }
}

/// A read path producing the current catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<CatalogSnapshot, CatalogLoadError>;
}

/// Catalog stored as a JSON document on the local filesystem.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self) -> Result<CatalogSnapshot, CatalogLoadError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CatalogLoadError::Io(anyhow::anyhow!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let file: CatalogFile = serde_json::from_str(&raw)?;
        let snapshot = file.into_snapshot()?;

        info!(
            path = %self.path.display(),
            tariff_bands = snapshot.tariffs.len(),
            options = snapshot.options.len(),
            "Catalog loaded"
        );

        Ok(snapshot)
    }
}
