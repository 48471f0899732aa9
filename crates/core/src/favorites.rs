//! Favorite set - the movie ids the user has marked, persisted locally.
//!
//! The full set is written back after every change under the
//! `favoriteMovies` key as a JSON array of integers. A missing or corrupt
//! stored value loads as an empty set.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::EntryId;
use crate::metrics::FAVORITE_CHANGES;
use crate::storage::{LocalStore, StorageError};

/// Storage key of the favorite set.
pub const FAVORITES_KEY: &str = "favoriteMovies";

/// Persisted set of favorite movie ids.
///
/// Ids are kept in ascending order, so the serialized form depends only on
/// set membership.
pub struct FavoriteSet {
    ids: BTreeSet<EntryId>,
    store: Arc<dyn LocalStore>,
}

impl FavoriteSet {
    /// Load the set from `store`.
    pub fn load(store: Arc<dyn LocalStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => parse_ids(&raw),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                warn!("Cannot read favorites, starting empty: {}", e);
                BTreeSet::new()
            }
        };

        debug!("Loaded {} favorites", ids.len());
        Self { ids, store }
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present, then persist.
    ///
    /// Returns the new membership. When persisting fails the in-memory set is
    /// left unchanged.
    pub fn toggle(&mut self, id: EntryId) -> Result<bool, StorageError> {
        let added = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };

        if let Err(e) = self.persist() {
            if added {
                self.ids.remove(&id);
            } else {
                self.ids.insert(id);
            }
            return Err(e);
        }

        let action = if added { "added" } else { "removed" };
        FAVORITE_CHANGES.with_label_values(&[action]).inc();
        debug!("Favorite {} {}", id, action);
        Ok(added)
    }

    /// Remove every favorite.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(FAVORITES_KEY)?;
        self.ids.clear();
        FAVORITE_CHANGES.with_label_values(&["cleared"]).inc();
        Ok(())
    }

    /// Favorite ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The persisted form of the current set.
    pub fn serialized(&self) -> String {
        let ids: Vec<EntryId> = self.ids().collect();
        serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.store.set(FAVORITES_KEY, &self.serialized())
    }
}

/// Parse a stored id list. Non-array values load as empty; non-integer
/// items are skipped.
fn parse_ids(raw: &str) -> BTreeSet<EntryId> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items.iter().filter_map(Value::as_i64).collect(),
        Ok(other) => {
            warn!("Ignoring stored favorites of unexpected shape: {}", other);
            BTreeSet::new()
        }
        Err(e) => {
            warn!("Ignoring corrupt stored favorites: {}", e);
            BTreeSet::new()
        }
    }
}
