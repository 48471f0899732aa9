//! External watch and trailer links for a movie.

use serde::Serialize;

use crate::catalog::Entry;

const YOUTUBE_SEARCH: &str = "https://www.youtube.com/results?search_query=";

/// Search links shown on the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WatchLinks {
    pub watch: String,
    pub trailer: String,
}

impl WatchLinks {
    pub fn for_entry(entry: &Entry) -> Self {
        Self {
            watch: watch_url(entry),
            trailer: trailer_url(entry),
        }
    }
}

/// Search for the full movie.
pub fn watch_url(entry: &Entry) -> String {
    youtube_search(&format!("{} tamil movie", entry.title_or_empty()))
}

/// Search for the trailer. The year is left out when unknown.
pub fn trailer_url(entry: &Entry) -> String {
    let query = match entry.year.as_deref() {
        Some(year) => format!("{} {} trailer", entry.title_or_empty(), year),
        None => format!("{} trailer", entry.title_or_empty()),
    };
    youtube_search(&query)
}

fn youtube_search(query: &str) -> String {
    format!("{}{}", YOUTUBE_SEARCH, urlencoding::encode(query.trim()))
}
