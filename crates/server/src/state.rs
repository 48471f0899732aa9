use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use tracing::{info, warn};

use cinedex_core::{
    load_catalog, CatalogError, CatalogSource, CatalogStore, Config, FavoriteSet, LocalStore,
    PageSize, SanitizedConfig,
};

use crate::metrics::CATALOG_ENTRIES;

/// Shared application state
pub struct AppState {
    config: Config,
    primary: Arc<dyn CatalogSource>,
    fallback: Option<Arc<dyn CatalogSource>>,
    /// Current snapshot, or why none could be loaded.
    catalog: RwLock<Result<Arc<CatalogStore>, String>>,
    favorites: Mutex<FavoriteSet>,
    store: Arc<dyn LocalStore>,
}

impl AppState {
    /// Create the state. The catalog starts unavailable until the first
    /// [`AppState::reload_catalog`].
    pub fn new(
        config: Config,
        primary: Arc<dyn CatalogSource>,
        fallback: Option<Arc<dyn CatalogSource>>,
        store: Arc<dyn LocalStore>,
    ) -> Self {
        let favorites = FavoriteSet::load(Arc::clone(&store));
        Self {
            config,
            primary,
            fallback,
            catalog: RwLock::new(Err("Catalog not loaded yet".to_string())),
            favorites: Mutex::new(favorites),
            store,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn page_size(&self) -> PageSize {
        PageSize::from_config(self.config.catalog.page_size)
    }

    pub fn static_dir(&self) -> Option<&Path> {
        self.config.static_dir.as_deref()
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Result<Arc<CatalogStore>, CatalogError> {
        match &*self.catalog.read().unwrap() {
            Ok(store) => Ok(Arc::clone(store)),
            Err(reason) => Err(CatalogError::DataUnavailable(reason.clone())),
        }
    }

    /// Fetch the catalog again and swap in the new snapshot.
    ///
    /// The sample dataset only stands in when no snapshot exists yet; a
    /// failed reload keeps the snapshot already being served.
    pub async fn reload_catalog(&self) -> Result<Arc<CatalogStore>, CatalogError> {
        let outcome = load_catalog(self.primary.as_ref(), self.fallback.as_deref()).await;

        let had_snapshot = self.catalog().is_ok();
        let use_sample = self.config.catalog.use_sample_on_failure && !had_snapshot;

        match CatalogStore::from_outcome(outcome, use_sample) {
            Ok(store) => {
                let store = Arc::new(store);
                info!(
                    "Catalog ready: {} entries from {:?}",
                    store.len(),
                    store.origin()
                );
                CATALOG_ENTRIES.set(store.len() as i64);
                *self.catalog.write().unwrap() = Ok(Arc::clone(&store));
                Ok(store)
            }
            Err(e) => {
                if had_snapshot {
                    warn!("Catalog reload failed, keeping current snapshot: {}", e);
                } else {
                    warn!("Catalog unavailable: {}", e);
                    *self.catalog.write().unwrap() = Err(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Lock the favorite set. Do not hold the guard across an await.
    pub fn favorites(&self) -> MutexGuard<'_, FavoriteSet> {
        self.favorites.lock().unwrap()
    }

    pub fn store(&self) -> &dyn LocalStore {
        self.store.as_ref()
    }
}
