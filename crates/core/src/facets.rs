//! Facet values derived from a catalog snapshot.
//!
//! Facets are recomputed when the catalog is (re)loaded, never per query.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{parse_int_prefix, Entry};

/// Selectable values for the secondary filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    /// Distinct years, newest first.
    pub years: Vec<String>,
    /// Distinct actor names, ascending.
    pub actors: Vec<String>,
    /// Distinct genre names, ascending.
    pub genres: Vec<String>,
}

impl Facets {
    /// Extract every facet from the full entry list.
    pub fn from_entries(entries: &[Entry]) -> Self {
        Self {
            years: year_values(entries),
            actors: actor_values(entries),
            genres: genre_values(entries),
        }
    }
}

/// Distinct non-null years, sorted descending.
/// Years compare by their integer value, then by text.
pub fn year_values(entries: &[Entry]) -> Vec<String> {
    let distinct: BTreeSet<&str> = entries.iter().filter_map(|e| e.year.as_deref()).collect();

    let mut years: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    years.sort_by(|a, b| {
        let ya = parse_int_prefix(a).unwrap_or(0);
        let yb = parse_int_prefix(b).unwrap_or(0);
        yb.cmp(&ya).then_with(|| b.cmp(a))
    });
    years
}

/// Distinct trimmed, non-empty cast names, sorted ascending.
pub fn actor_values(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.cast_members())
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct genre tokens from the comma-separated genre strings, ascending.
pub fn genre_values(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(|e| e.genres())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
