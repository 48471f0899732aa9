//! Catalog view: filter, sort and paginate the catalog for a query.
//!
//! Views are pure functions of the catalog snapshot, the favorite set and
//! the query state. They never touch storage or the network.

mod filter;
mod paginate;
mod query;
mod sort;

pub use filter::{
    filter_entries, matches_actor, matches_category, matches_genre, matches_search, matches_year,
    POPULAR_MIN_RATING,
};
pub use paginate::{page_links, PageLink, PageSize};
pub use query::{Category, QueryError, QueryState, SortDirection};
pub use sort::{collation_key, compare_titles, sort_entries};

use serde::Serialize;

use crate::catalog::Entry;
use crate::favorites::FavoriteSet;

/// One page of a catalog view.
#[derive(Debug, Clone, Serialize)]
pub struct ViewPage<'a> {
    /// Entries on this page, in display order.
    pub items: Vec<&'a Entry>,
    /// Entries matching the query across all pages.
    pub total_count: usize,
    pub total_pages: usize,
    /// The requested page (1-based).
    pub page: usize,
}

impl ViewPage<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Navigation links for this page.
    pub fn links(&self) -> Vec<PageLink> {
        page_links(self.page, self.total_pages)
    }
}

/// Every entry matching `query`, in display order.
pub fn matching_entries<'a>(
    entries: &'a [Entry],
    favorites: &FavoriteSet,
    query: &QueryState,
) -> Vec<&'a Entry> {
    let mut matched = filter_entries(entries, favorites, query);
    sort_entries(&mut matched, query.category, query.direction);
    matched
}

/// Compute the page of the catalog selected by `query`.
///
/// A page outside `[1, total_pages]` yields an empty page; callers clamp
/// with [`QueryState::clamp_page`] first when they want the nearest valid
/// page instead.
pub fn catalog_view<'a>(
    entries: &'a [Entry],
    favorites: &FavoriteSet,
    query: &QueryState,
    page_size: PageSize,
) -> ViewPage<'a> {
    let matched = matching_entries(entries, favorites, query);
    let total_count = matched.len();
    let window = page_size.window(query.page, total_count);

    ViewPage {
        items: matched[window].to_vec(),
        total_count,
        total_pages: page_size.total_pages(total_count),
        page: query.page,
    }
}
