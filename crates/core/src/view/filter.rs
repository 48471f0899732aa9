//! Filter step: category predicates, facets and free-text search.

use crate::catalog::{parse_int_prefix, Entry};
use crate::favorites::FavoriteSet;

use super::query::{Category, QueryState};

/// Minimum rating for an entry to count as popular on rating alone.
pub const POPULAR_MIN_RATING: f64 = 7.5;

/// Category predicate.
pub fn matches_category(entry: &Entry, category: Category, favorites: &FavoriteSet) -> bool {
    match category {
        Category::Popular => {
            let rated_high = entry.rating.is_some() && entry.rating_value() >= POPULAR_MIN_RATING;
            rated_high || entry.image_ref().is_some()
        }
        Category::ByYear => true,
        Category::ByRating => entry.rating.is_some(),
        Category::Alphabetical => entry.title.is_some(),
        Category::Favorites => favorites.contains(entry.id),
    }
}

/// Year facet: textual equality, or equal integer values ("2015" == "2015.0").
pub fn matches_year(entry: &Entry, year: &str) -> bool {
    let Some(entry_year) = entry.year.as_deref() else {
        return false;
    };
    if entry_year.trim() == year.trim() {
        return true;
    }
    match (parse_int_prefix(entry_year), parse_int_prefix(year)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Actor facet: some cast member's name contains `actor` (case-sensitive).
pub fn matches_actor(entry: &Entry, actor: &str) -> bool {
    entry.cast_members().iter().any(|name| name.contains(actor))
}

/// Genre facet: the genre string contains `genre` (case-sensitive).
pub fn matches_genre(entry: &Entry, genre: &str) -> bool {
    entry.genre.as_deref().is_some_and(|g| g.contains(genre))
}

/// Free-text search over title, director and cast.
///
/// `term` must already be lowercased. Absent fields never match.
pub fn matches_search(entry: &Entry, term: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(term);

    entry.title.as_deref().is_some_and(contains)
        || entry.director.as_deref().is_some_and(contains)
        || entry.cast_members().iter().any(|name| contains(name.as_str()))
}

/// Apply the filter step, preserving catalog order.
///
/// An active search replaces the category predicate and the year/actor
/// facets. The genre facet applies in every case.
pub fn filter_entries<'a>(
    entries: &'a [Entry],
    favorites: &FavoriteSet,
    query: &QueryState,
) -> Vec<&'a Entry> {
    let search = query.search_term().map(str::to_lowercase);
    let use_facets = search.is_none() && query.category != Category::Favorites;

    entries
        .iter()
        .filter(|entry| match &search {
            Some(term) => matches_search(entry, term),
            None => matches_category(entry, query.category, favorites),
        })
        .filter(|entry| {
            !use_facets || query.year.as_deref().is_none_or(|y| matches_year(entry, y))
        })
        .filter(|entry| {
            !use_facets || query.actor.as_deref().is_none_or(|a| matches_actor(entry, a))
        })
        .filter(|entry| query.genre.as_deref().is_none_or(|g| matches_genre(entry, g)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{favorites, movie};

    #[test]
    fn test_popular_predicate() {
        let none = favorites(&[]);
        let high = movie(1, "High").rating("8.0").build();
        let low = movie(2, "Low").rating("6.0").build();
        let low_with_image = movie(3, "Pictured").rating("5.0").image("a.jpg").build();
        let unrated = movie(4, "Unrated").build();
        let boundary = movie(5, "Edge").rating("7.5").build();

        assert!(matches_category(&high, Category::Popular, &none));
        assert!(!matches_category(&low, Category::Popular, &none));
        assert!(matches_category(&low_with_image, Category::Popular, &none));
        assert!(!matches_category(&unrated, Category::Popular, &none));
        assert!(matches_category(&boundary, Category::Popular, &none));

        let empty_image = movie(6, "Blank").rating("5.0").image("").build();
        assert!(!matches_category(&empty_image, Category::Popular, &none));
    }

    #[test]
    fn test_rating_and_title_presence() {
        let none = favorites(&[]);
        let rated = movie(1, "Rated").rating("6.1").build();
        let mut untitled = movie(2, "x").build();
        untitled.title = None;

        assert!(matches_category(&rated, Category::ByRating, &none));
        assert!(!matches_category(&untitled, Category::ByRating, &none));
        assert!(!matches_category(&untitled, Category::Alphabetical, &none));
        assert!(matches_category(&untitled, Category::ByYear, &none));
    }

    #[test]
    fn test_year_loose_equality() {
        let e = movie(1, "Petta").year("2019").build();
        assert!(matches_year(&e, "2019"));
        assert!(matches_year(&e, " 2019"));
        assert!(!matches_year(&e, "2018"));
        assert!(!matches_year(&movie(2, "No year").build(), "2019"));
    }

    #[test]
    fn test_actor_substring_case_sensitive() {
        let e = movie(1, "Petta")
            .cast(&["Rajinikanth", "Vijay Sethupathi"])
            .build();
        assert!(matches_actor(&e, "Vijay"));
        assert!(!matches_actor(&e, "vijay"));
        assert!(!matches_actor(&movie(2, "No cast").build(), "Vijay"));
    }

    #[test]
    fn test_search_fields() {
        let e = movie(1, "Baahubali: The Beginning")
            .director("S.S. Rajamouli")
            .cast(&["Prabhas"])
            .build();
        assert!(matches_search(&e, "baahubali"));
        assert!(matches_search(&e, "rajamouli"));
        assert!(matches_search(&e, "prabhas"));
        assert!(!matches_search(&e, "petta"));

        let mut bare = movie(2, "x").build();
        bare.title = None;
        assert!(!matches_search(&bare, "x"));
    }

    #[test]
    fn test_search_replaces_category_and_facets() {
        let entries = vec![
            movie(1, "Vikram").rating("5.0").year("2022").build(),
            movie(2, "Vikram Vedha").rating("8.2").year("2017").build(),
        ];
        let query = QueryState::new()
            .with_category(Category::ByYear)
            .with_year(Some("2017".to_string()))
            .with_search(Some("VIKRAM".to_string()));

        let result = filter_entries(&entries, &favorites(&[]), &query);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_genre_applies_during_search() {
        let entries = vec![
            movie(1, "Vikram").genre("Action, Thriller").build(),
            movie(2, "Vikram Vedha").genre("Crime, Drama").build(),
        ];
        let query = QueryState::new()
            .with_search(Some("vikram".to_string()))
            .with_genre(Some("Drama".to_string()));

        let ids: Vec<_> = filter_entries(&entries, &favorites(&[]), &query)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_facets_ignored_for_favorites() {
        let entries = vec![
            movie(1, "A").year("2001").build(),
            movie(2, "B").year("2002").build(),
        ];
        let mut query = QueryState::new().with_category(Category::Favorites);
        query.year = Some("2001".to_string());

        let result = filter_entries(&entries, &favorites(&[1, 2]), &query);
        assert_eq!(result.len(), 2);
    }
}
