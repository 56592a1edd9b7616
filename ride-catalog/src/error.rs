//! Catalog loading errors.

use ride_core::error::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog: {0}")]
    Io(anyhow::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),

    #[error("configuration error: {0}")]
    Config(anyhow::Error),
}

impl From<config::ConfigError> for CatalogLoadError {
    fn from(err: config::ConfigError) -> Self {
        CatalogLoadError::Config(anyhow::Error::new(err))
    }
}
