use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::FirmRecord;
use crate::services::dataset::{load_firms, DatasetError};

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Dataset load failed: {0}")]
    Load(#[from] Arc<DatasetError>),
}

/// Shared, read-only firm dataset
pub type Dataset = Arc<Vec<FirmRecord>>;

/// Memoizing dataset loader
///
/// Keeps parsed datasets in memory keyed by file path. Concurrent first
/// requests for the same path share a single load, and every caller gets
/// the same `Arc` so the matching core only ever sees read-only data.
#[derive(Clone)]
pub struct DatasetCache {
    entries: moka::future::Cache<PathBuf, Dataset>,
    ttl_secs: u64,
}

impl DatasetCache {
    /// Create a new cache holding up to `capacity` datasets for `ttl_secs`
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries, ttl_secs }
    }

    /// Get the dataset at `path`, loading it on first use
    pub async fn get<P: AsRef<Path>>(&self, path: P) -> Result<Dataset, CacheError> {
        let key = path.as_ref().to_path_buf();
        let loader_path = key.clone();

        let dataset = self
            .entries
            .try_get_with(key, async move {
                tracing::debug!("Dataset cache miss: {}", loader_path.display());
                let firms = tokio::task::spawn_blocking(move || load_firms(&loader_path)).await??;
                Ok::<_, DatasetError>(Arc::new(firms))
            })
            .await?;

        Ok(dataset)
    }

    /// Seed the cache with an already loaded dataset
    pub async fn insert<P: AsRef<Path>>(&self, path: P, firms: Vec<FirmRecord>) -> Dataset {
        let dataset = Arc::new(firms);
        self.entries
            .insert(path.as_ref().to_path_buf(), dataset.clone())
            .await;
        dataset
    }

    /// Drop a cached dataset so the next request reloads it
    pub async fn invalidate<P: AsRef<Path>>(&self, path: P) {
        self.entries.invalidate(path.as_ref()).await;
        tracing::info!("Dataset cache invalidated: {}", path.as_ref().display());
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.entries.run_pending_tasks().await;
        CacheStats {
            entries: self.entries.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}
