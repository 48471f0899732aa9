//! Pagination: page counts, page windows and page navigation links.

use serde::{Deserialize, Serialize};

/// Pages shown on each side of the current one before an ellipsis.
const LINK_RADIUS: i64 = 2;

/// Number of entries per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    Limited(usize),
    /// Everything on a single page.
    Unbounded,
}

impl PageSize {
    /// A configured size where 0 means unbounded.
    pub fn from_config(size: usize) -> Self {
        if size == 0 {
            PageSize::Unbounded
        } else {
            PageSize::Limited(size)
        }
    }

    /// Entries per page, or `None` for a single page. `Limited(0)` is
    /// treated as unbounded.
    fn limit(&self) -> Option<usize> {
        match *self {
            PageSize::Limited(size) if size > 0 => Some(size),
            _ => None,
        }
    }

    /// Number of pages for `count` entries; never less than 1.
    pub fn total_pages(&self, count: usize) -> usize {
        match self.limit() {
            Some(size) => count.div_ceil(size).max(1),
            None => 1,
        }
    }

    /// Index range of `page` (1-based) within `count` entries.
    ///
    /// Pages outside `[1, total_pages]` get an empty range.
    pub fn window(&self, page: usize, count: usize) -> std::ops::Range<usize> {
        if page == 0 || page > self.total_pages(count) {
            return 0..0;
        }
        match self.limit() {
            Some(size) => {
                let start = (page - 1).saturating_mul(size).min(count);
                let end = start.saturating_add(size).min(count);
                start..end
            }
            None => 0..count,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Limited(12)
    }
}

/// One element of the page navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageLink {
    Previous { page: usize, disabled: bool },
    Page { page: usize, current: bool },
    Ellipsis,
    Next { page: usize, disabled: bool },
}

/// Navigation links for page `current` of `total`.
///
/// Nothing is shown for a single page. Otherwise: previous, the first and
/// last pages, pages within two of the current one, an ellipsis where a run
/// is skipped, next.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let mut links = vec![PageLink::Previous {
        page: current.saturating_sub(1).max(1),
        disabled: current == 1,
    }];

    let cur = current as i64;
    for i in 1..=total {
        let distance = i as i64 - cur;
        if i == 1 || i == total || distance.abs() <= LINK_RADIUS {
            links.push(PageLink::Page {
                page: i,
                current: i == current,
            });
        } else if distance.abs() == LINK_RADIUS + 1 {
            links.push(PageLink::Ellipsis);
        }
    }

    links.push(PageLink::Next {
        page: (current + 1).min(total),
        disabled: current == total,
    });
    links
}
