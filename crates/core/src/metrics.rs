//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog loading (which source answered)
//! - Favorite set mutations

use once_cell::sync::Lazy;
use prometheus::{core::Collector, IntCounterVec, Opts};

/// Catalog loads by outcome.
pub static CATALOG_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("cinedex_catalog_loads_total", "Total catalog load attempts"),
        &["outcome"], // "primary", "fallback", "unavailable"
    )
    .unwrap()
});

/// Favorite set mutations by action.
pub static FAVORITE_CHANGES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "cinedex_favorite_changes_total",
            "Total favorite set mutations",
        ),
        &["action"], // "added", "removed", "cleared"
    )
    .unwrap()
});

/// All core metrics, for registration in the server's registry.
pub fn all_metrics() -> Vec<Box<dyn Collector>> {
    vec![
        Box::new(CATALOG_LOADS.clone()),
        Box::new(FAVORITE_CHANGES.clone()),
    ]
}
