use futures::future::{BoxFuture, FutureExt, Shared};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::features::regions::services::{CatalogError, RegionCatalog, RegionSource};

type LoadResult = Result<Arc<RegionCatalog>, CatalogError>;
type LoadFuture = Shared<BoxFuture<'static, LoadResult>>;

enum LoadState {
    Idle,
    /// One in-flight load shared by every caller; `attempt` tells a finished
    /// waiter whether the state still refers to its own load
    Loading { attempt: u64, load: LoadFuture },
    Ready(Arc<RegionCatalog>),
}

/// Owns the region catalog and loads it at most once.
///
/// Concurrent first-time callers share a single in-flight load. A failed load
/// is reported to every caller waiting on it and the service returns to idle,
/// so the next call starts a fresh attempt.
pub struct RegionCatalogService {
    source: Arc<dyn RegionSource>,
    load_timeout: Duration,
    state: Mutex<LoadState>,
    attempts: AtomicU64,
}

impl RegionCatalogService {
    pub fn new(source: Arc<dyn RegionSource>, load_timeout: Duration) -> Self {
        Self {
            source,
            load_timeout,
            state: Mutex::new(LoadState::Idle),
            attempts: AtomicU64::new(0),
        }
    }

    /// Get the catalog, loading it first if needed
    pub async fn catalog(&self) -> Result<Arc<RegionCatalog>, CatalogError> {
        let (attempt, load) = {
            let mut state = self.state.lock().await;
            match &*state {
                LoadState::Ready(catalog) => return Ok(Arc::clone(catalog)),
                LoadState::Loading { attempt, load } => (*attempt, load.clone()),
                LoadState::Idle => {
                    let attempt = self.attempts.fetch_add(1, Ordering::Relaxed) + 1;
                    let load = Self::load(Arc::clone(&self.source), self.load_timeout)
                        .boxed()
                        .shared();
                    *state = LoadState::Loading {
                        attempt,
                        load: load.clone(),
                    };
                    (attempt, load)
                }
            }
        };

        let result = load.await;

        let mut state = self.state.lock().await;
        if let LoadState::Loading { attempt: current, .. } = &*state {
            if *current == attempt {
                *state = match &result {
                    Ok(catalog) => LoadState::Ready(Arc::clone(catalog)),
                    Err(_) => LoadState::Idle,
                };
            }
        }

        result
    }

    /// Warm the catalog at startup; failure is logged and left for a later retry
    pub async fn preload(&self) {
        if let Err(e) = self.catalog().await {
            tracing::warn!(
                "Region catalog preload failed, will retry on first use: {}",
                e
            );
        }
    }

    pub async fn is_ready(&self) -> bool {
        matches!(*self.state.lock().await, LoadState::Ready(_))
    }

    async fn load(source: Arc<dyn RegionSource>, load_timeout: Duration) -> LoadResult {
        let started = Instant::now();
        tracing::info!("Loading region catalog from {}", source.describe());

        let text = tokio::time::timeout(load_timeout, source.fetch())
            .await
            .map_err(|_| CatalogError::Timeout(load_timeout))
            .and_then(|fetched| fetched)
            .inspect_err(|e| tracing::error!("Region catalog load failed: {}", e))?;

        let catalog = RegionCatalog::from_document(&text)
            .inspect_err(|e| tracing::error!("Region catalog load failed: {}", e))?;

        tracing::info!(
            "Region catalog loaded: provinces={}, cities={}, districts={}, elapsed_ms={}",
            catalog.province_count(),
            catalog.city_count(),
            catalog.district_count(),
            started.elapsed().as_millis()
        );

        Ok(Arc::new(catalog))
    }
}
