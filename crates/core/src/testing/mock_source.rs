//! Mock catalog source for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, CatalogSource, Entry};

/// Mock implementation of the CatalogSource trait.
///
/// Clones share state, so a test can keep one handle while another is owned
/// by the code under test:
///
/// ```rust,ignore
/// use cinedex_core::testing::MockSource;
///
/// let source = MockSource::ok("primary.json", entries);
/// let handle = source.clone();
///
/// let outcome = load_catalog(&source, None).await;
/// assert_eq!(handle.fetch_count(), 1);
///
/// handle.set_failing(true).await;
/// ```
#[derive(Debug, Clone)]
pub struct MockSource {
    location: String,
    entries: Arc<RwLock<Vec<Entry>>>,
    failing: Arc<RwLock<bool>>,
    fetches: Arc<AtomicUsize>,
}

impl MockSource {
    /// A source that returns `entries`.
    pub fn ok(location: &str, entries: Vec<Entry>) -> Self {
        Self {
            location: location.to_string(),
            entries: Arc::new(RwLock::new(entries)),
            failing: Arc::new(RwLock::new(false)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source whose every fetch fails.
    pub fn failing(location: &str) -> Self {
        let mut source = Self::ok(location, Vec::new());
        source.failing = Arc::new(RwLock::new(true));
        source
    }

    /// Replace the entries returned by later fetches.
    pub async fn set_entries(&self, entries: Vec<Entry>) {
        *self.entries.write().await = entries;
    }

    /// Make later fetches fail (or succeed again).
    pub async fn set_failing(&self, failing: bool) {
        *self.failing.write().await = failing;
    }

    /// Number of fetches attempted so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for MockSource {
    fn location(&self) -> String {
        self.location.clone()
    }

    async fn fetch(&self) -> Result<Vec<Entry>, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if *self.failing.read().await {
            return Err(CatalogError::Io {
                path: self.location.clone(),
                message: "mock source unavailable".to_string(),
            });
        }
        Ok(self.entries.read().await.clone())
    }
}
