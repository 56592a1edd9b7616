//! Cached catalog store with caller-driven refresh and invalidation.

use crate::error::CatalogLoadError;
use crate::source::{CatalogSnapshot, CatalogSource};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

/// Holds the most recently fetched catalog snapshot.
///
/// Refresh cadence belongs to the caller: typically one refresh at startup,
/// then `invalidate` whenever the backoffice edits tariffs.
pub struct CatalogStore<S: CatalogSource> {
    source: S,
    current: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl<S: CatalogSource> CatalogStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: RwLock::new(None),
        }
    }

    /// Fetch a fresh snapshot from the source and make it current.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Arc<CatalogSnapshot>, CatalogLoadError> {
        let snapshot = Arc::new(self.source.fetch().await?);
        *self.current.write().await = Some(snapshot.clone());
        info!(
            tariff_bands = snapshot.tariffs.len(),
            options = snapshot.options.len(),
            "Catalog refreshed"
        );
        Ok(snapshot)
    }

    /// The cached snapshot, if one has been loaded.
    pub async fn current(&self) -> Option<Arc<CatalogSnapshot>> {
        self.current.read().await.clone()
    }

    /// The cached snapshot, fetching one first if the cache is empty.
    pub async fn get_or_refresh(&self) -> Result<Arc<CatalogSnapshot>, CatalogLoadError> {
        if let Some(snapshot) = self.current().await {
            return Ok(snapshot);
        }
        self.refresh().await
    }

    /// Drop the cached snapshot; the next read fetches anew.
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
    }
}
