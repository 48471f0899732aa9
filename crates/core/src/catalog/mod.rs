//! Movie catalog - the full entry list, loaded once per session.
//!
//! Loading is a one-shot operation: the primary source is tried, then the
//! fallback source exactly once. The result is an immutable [`CatalogStore`]
//! snapshot with its facets precomputed.

mod sample;
mod source;
mod types;

pub use sample::sample_entries;
pub use source::{parse_catalog, source_for, CatalogSource, FileSource, HttpSource};
pub use types::*;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::facets::Facets;
use crate::metrics::CATALOG_LOADS;

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source returned status {status}: {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Catalog data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Movie not found: {0}")]
    NotFound(EntryId),
}

/// Where the entries of a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogOrigin {
    Primary,
    Fallback,
    Sample,
}

/// Result of the two-stage load.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The primary source answered.
    Primary(Vec<Entry>),
    /// The primary failed and the fallback answered.
    Fallback {
        entries: Vec<Entry>,
        primary_error: CatalogError,
    },
    /// Both attempts failed (or the primary failed with no fallback configured).
    Unavailable {
        primary_error: CatalogError,
        fallback_error: Option<CatalogError>,
    },
}

impl LoadOutcome {
    /// Label used for logging and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            LoadOutcome::Primary(_) => "primary",
            LoadOutcome::Fallback { .. } => "fallback",
            LoadOutcome::Unavailable { .. } => "unavailable",
        }
    }

    /// Entries and their origin, or `DataUnavailable`.
    pub fn into_entries(self) -> Result<(Vec<Entry>, CatalogOrigin), CatalogError> {
        match self {
            LoadOutcome::Primary(entries) => Ok((entries, CatalogOrigin::Primary)),
            LoadOutcome::Fallback { entries, .. } => Ok((entries, CatalogOrigin::Fallback)),
            LoadOutcome::Unavailable {
                primary_error,
                fallback_error,
            } => {
                let message = match fallback_error {
                    Some(fallback) => format!("primary: {}; fallback: {}", primary_error, fallback),
                    None => format!("primary: {}; no fallback configured", primary_error),
                };
                Err(CatalogError::DataUnavailable(message))
            }
        }
    }
}

/// Load the catalog: primary first, then the fallback once.
pub async fn load_catalog(
    primary: &dyn CatalogSource,
    fallback: Option<&dyn CatalogSource>,
) -> LoadOutcome {
    let outcome = match primary.fetch().await {
        Ok(entries) => LoadOutcome::Primary(entries),
        Err(primary_error) => {
            warn!(
                "Failed to load catalog from {}: {}",
                primary.location(),
                primary_error
            );
            match fallback {
                Some(source) => match source.fetch().await {
                    Ok(entries) => {
                        info!("Loaded fallback catalog from {}", source.location());
                        LoadOutcome::Fallback {
                            entries,
                            primary_error,
                        }
                    }
                    Err(fallback_error) => {
                        warn!(
                            "Failed to load fallback catalog from {}: {}",
                            source.location(),
                            fallback_error
                        );
                        LoadOutcome::Unavailable {
                            primary_error,
                            fallback_error: Some(fallback_error),
                        }
                    }
                },
                None => LoadOutcome::Unavailable {
                    primary_error,
                    fallback_error: None,
                },
            }
        }
    };

    CATALOG_LOADS.with_label_values(&[outcome.label()]).inc();
    outcome
}

/// Immutable catalog snapshot.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Vec<Entry>,
    origin: CatalogOrigin,
    loaded_at: DateTime<Utc>,
    facets: Facets,
}

impl CatalogStore {
    /// Build a snapshot and compute its facets.
    pub fn new(entries: Vec<Entry>, origin: CatalogOrigin) -> Self {
        let mut seen = HashSet::with_capacity(entries.len());
        let duplicates = entries.iter().filter(|e| !seen.insert(e.id)).count();
        if duplicates > 0 {
            warn!("Catalog contains {} entries with duplicate ids", duplicates);
        }

        let facets = Facets::from_entries(&entries);
        Self {
            entries,
            origin,
            loaded_at: Utc::now(),
            facets,
        }
    }

    /// Turn a load outcome into a snapshot.
    ///
    /// When both sources failed, the built-in sample data is used if
    /// `use_sample` is set; otherwise the failure is returned.
    pub fn from_outcome(outcome: LoadOutcome, use_sample: bool) -> Result<Self, CatalogError> {
        match outcome.into_entries() {
            Ok((entries, origin)) => Ok(Self::new(entries, origin)),
            Err(e) if use_sample => {
                warn!("{}; using built-in sample catalog", e);
                Ok(Self::new(sample_entries(), CatalogOrigin::Sample))
            }
            Err(e) => Err(e),
        }
    }

    /// All entries, in source order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: EntryId) -> Result<&Entry, CatalogError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
