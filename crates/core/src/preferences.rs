//! Presentation preferences kept alongside the favorite set.

use crate::storage::{LocalStore, StorageError};

/// Storage key of the dark mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Whether dark mode is on. Only the exact value `"true"` enables it.
pub fn dark_mode(store: &dyn LocalStore) -> bool {
    matches!(store.get(DARK_MODE_KEY), Ok(Some(v)) if v == "true")
}

/// Persist the dark mode flag as `"true"` / `"false"`.
pub fn set_dark_mode(store: &dyn LocalStore, enabled: bool) -> Result<(), StorageError> {
    store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
}
