//! Query state: what the user is currently looking at.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for unrecognised query parameter values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),
}

/// A named filter + sort preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Popular,
    ByYear,
    ByRating,
    Alphabetical,
    Favorites,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Popular,
        Category::ByYear,
        Category::ByRating,
        Category::Alphabetical,
        Category::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Popular => "popular",
            Category::ByYear => "by_year",
            Category::ByRating => "by_rating",
            Category::Alphabetical => "alphabetical",
            Category::Favorites => "favorites",
        }
    }

    /// Heading shown above the list.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Popular => "Popular Movies",
            Category::ByYear => "Movies by Year",
            Category::ByRating => "Movies by Rating",
            Category::Alphabetical => "Movies A-Z",
            Category::Favorites => "Favorite Movies",
        }
    }

    /// Direction selected when switching to this category.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Category::Alphabetical => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QueryError;

    /// Accepts the canonical names plus the short tab names
    /// (`year`, `rating`, `atoz`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "popular" => Ok(Category::Popular),
            "by_year" | "by-year" | "year" => Ok(Category::ByYear),
            "by_rating" | "by-rating" | "rating" => Ok(Category::ByRating),
            "alphabetical" | "atoz" | "a-z" => Ok(Category::Alphabetical),
            "favorites" | "favourites" => Ok(Category::Favorites),
            _ => Err(QueryError::UnknownCategory(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(QueryError::UnknownDirection(s.to_string())),
        }
    }
}

/// Everything that drives one rendered view.
///
/// Values are immutable: each `with_*` method returns a new state. Every
/// change other than [`QueryState::with_page`] sends the user back to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub category: Category,
    pub direction: SortDirection,
    pub year: Option<String>,
    pub actor: Option<String>,
    pub genre: Option<String>,
    pub search: Option<String>,
    /// 1-based page number.
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            category: Category::Popular,
            direction: SortDirection::Descending,
            year: None,
            actor: None,
            genre: None,
            search: None,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch category.
    ///
    /// The direction resets to the category default. The year facet is kept
    /// only for by-year; the actor facet is kept for by-year and alphabetical.
    pub fn with_category(self, category: Category) -> Self {
        Self {
            category,
            direction: category.default_direction(),
            year: if category == Category::ByYear {
                self.year
            } else {
                None
            },
            actor: if matches!(category, Category::ByYear | Category::Alphabetical) {
                self.actor
            } else {
                None
            },
            page: 1,
            ..self
        }
    }

    pub fn with_direction(self, direction: SortDirection) -> Self {
        Self {
            direction,
            page: 1,
            ..self
        }
    }

    /// Select a year facet; `None`, empty or `"all"` clears it.
    pub fn with_year(self, year: Option<String>) -> Self {
        Self {
            year: facet_value(year),
            page: 1,
            ..self
        }
    }

    /// Select an actor facet; `None`, empty or `"all"` clears it.
    pub fn with_actor(self, actor: Option<String>) -> Self {
        Self {
            actor: facet_value(actor),
            page: 1,
            ..self
        }
    }

    /// Select a genre facet; `None`, empty or `"all"` clears it.
    pub fn with_genre(self, genre: Option<String>) -> Self {
        Self {
            genre: facet_value(genre),
            page: 1,
            ..self
        }
    }

    /// Set the free-text search; blank text clears it.
    pub fn with_search(self, search: Option<String>) -> Self {
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            search,
            page: 1,
            ..self
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Clamp the page into `[1, total_pages]`.
    pub fn clamp_page(self, total_pages: usize) -> Self {
        let page = self.page.clamp(1, total_pages.max(1));
        Self { page, ..self }
    }

    /// Active search term, if any.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn facet_value(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && !v.eq_ignore_ascii_case("all"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = QueryState::new();
        assert_eq!(q.category, Category::Popular);
        assert_eq!(q.direction, SortDirection::Descending);
        assert_eq!(q.page, 1);
        assert!(q.search_term().is_none());
    }

    #[test]
    fn test_category_parse_aliases() {
        assert_eq!("atoz".parse::<Category>().unwrap(), Category::Alphabetical);
        assert_eq!("year".parse::<Category>().unwrap(), Category::ByYear);
        assert_eq!("by_rating".parse::<Category>().unwrap(), Category::ByRating);
        assert_eq!("Favorites".parse::<Category>().unwrap(), Category::Favorites);
        assert_eq!(
            "trending".parse::<Category>(),
            Err(QueryError::UnknownCategory("trending".to_string()))
        );
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_alphabetical_defaults_to_ascending() {
        let q = QueryState::new().with_category(Category::Alphabetical);
        assert_eq!(q.direction, SortDirection::Ascending);

        let q = q.with_category(Category::ByRating);
        assert_eq!(q.direction, SortDirection::Descending);
    }

    #[test]
    fn test_category_switch_resets_facets() {
        let q = QueryState::new()
            .with_category(Category::ByYear)
            .with_year(Some("2019".to_string()))
            .with_actor(Some("Simran".to_string()));

        let by_year = q.clone().with_category(Category::ByYear);
        assert_eq!(by_year.year.as_deref(), Some("2019"));
        assert_eq!(by_year.actor.as_deref(), Some("Simran"));

        let alpha = q.clone().with_category(Category::Alphabetical);
        assert!(alpha.year.is_none());
        assert_eq!(alpha.actor.as_deref(), Some("Simran"));

        let rating = q.with_category(Category::ByRating);
        assert!(rating.year.is_none());
        assert!(rating.actor.is_none());
    }

    #[test]
    fn test_changes_reset_page() {
        let q = QueryState::new().with_page(4);
        assert_eq!(q.page, 4);
        assert_eq!(q.clone().with_direction(SortDirection::Ascending).page, 1);
        assert_eq!(q.clone().with_search(Some("petta".to_string())).page, 1);
        assert_eq!(q.clone().with_genre(Some("Drama".to_string())).page, 1);
        assert_eq!(q.with_category(Category::Favorites).page, 1);
    }

    #[test]
    fn test_all_and_blank_clear_facets() {
        let q = QueryState::new()
            .with_year(Some("all".to_string()))
            .with_actor(Some("  ".to_string()))
            .with_search(Some("   ".to_string()));
        assert!(q.year.is_none());
        assert!(q.actor.is_none());
        assert!(q.search.is_none());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(QueryState::new().with_page(0).clamp_page(3).page, 1);
        assert_eq!(QueryState::new().with_page(9).clamp_page(3).page, 3);
        assert_eq!(QueryState::new().with_page(2).clamp_page(3).page, 2);
        assert_eq!(QueryState::new().with_page(5).clamp_page(0).page, 1);
    }
}
