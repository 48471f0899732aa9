//! Testing utilities: a mock catalog source and entry fixtures.
//!
//! Used by unit tests in this crate and by the server's integration tests.

mod mock_source;

pub use fixtures::{favorites, movie};
pub use mock_source::MockSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::sync::Arc;

    use serde_json::Value;

    use crate::catalog::{Entry, EntryId};
    use crate::favorites::{FavoriteSet, FAVORITES_KEY};
    use crate::storage::{LocalStore, MemoryStore};

    /// Builder for test entries.
    #[derive(Debug, Clone)]
    pub struct MovieBuilder {
        entry: Entry,
    }

    /// Start an entry with an id and title; everything else absent.
    pub fn movie(id: EntryId, title: &str) -> MovieBuilder {
        MovieBuilder {
            entry: Entry::new(id, title),
        }
    }

    impl MovieBuilder {
        pub fn year(mut self, year: &str) -> Self {
            self.entry.year = Some(year.to_string());
            self
        }

        pub fn rating(mut self, rating: &str) -> Self {
            self.entry.rating = Some(rating.to_string());
            self
        }

        pub fn genre(mut self, genre: &str) -> Self {
            self.entry.genre = Some(genre.to_string());
            self
        }

        pub fn director(mut self, director: &str) -> Self {
            self.entry.director = Some(director.to_string());
            self
        }

        pub fn cast(mut self, names: &[&str]) -> Self {
            self.entry.cast = Some(names.iter().map(|n| n.to_string()).collect());
            self
        }

        pub fn image(mut self, url: &str) -> Self {
            self.entry.image = Some(url.to_string());
            self
        }

        pub fn poster(mut self, url: &str) -> Self {
            self.entry.poster = Some(url.to_string());
            self
        }

        /// Set a passthrough field such as `plot` or `runtime`.
        pub fn extra(mut self, key: &str, value: impl Into<Value>) -> Self {
            self.entry.extra.insert(key.to_string(), value.into());
            self
        }

        pub fn build(self) -> Entry {
            self.entry
        }
    }

    /// A favorite set holding `ids`, backed by an in-memory store.
    pub fn favorites(ids: &[EntryId]) -> FavoriteSet {
        let store: Arc<dyn LocalStore> = if ids.is_empty() {
            Arc::new(MemoryStore::new())
        } else {
            let raw = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
            Arc::new(MemoryStore::with_value(FAVORITES_KEY, &raw))
        };
        FavoriteSet::load(store)
    }

    /// A small catalog covering every category and facet.
    pub fn catalog() -> Vec<Entry> {
        vec![
            movie(1, "Baahubali: The Beginning")
                .year("2015")
                .rating("8.1")
                .genre("Action, Drama")
                .director("S.S. Rajamouli")
                .cast(&["Prabhas", "Rana Daggubati", "Anushka Shetty"])
                .poster("https://img.example/baahubali.jpg")
                .build(),
            movie(2, "Petta")
                .year("2019")
                .rating("7.3")
                .genre("Action, Drama")
                .director("Karthik Subbaraj")
                .cast(&["Rajinikanth", "Vijay Sethupathi", "Simran"])
                .build(),
            movie(3, "Vikram Vedha")
                .year("2017")
                .rating("8.4")
                .genre("Action, Crime, Thriller")
                .director("Pushkar-Gayathri")
                .cast(&["R. Madhavan", "Vijay Sethupathi"])
                .build(),
            movie(4, "96")
                .year("2018")
                .rating("8.5")
                .genre("Drama, Romance")
                .director("C. Prem Kumar")
                .cast(&["Vijay Sethupathi", "Trisha"])
                .build(),
            movie(5, "anbe sivam")
                .year("2003")
                .rating("8.6")
                .genre("Adventure, Comedy, Drama")
                .director("Sundar C.")
                .cast(&["Kamal Haasan", "R. Madhavan"])
                .build(),
            movie(6, "Master")
                .year("2021")
                .rating("6.9")
                .genre("Action, Thriller")
                .director("Lokesh Kanagaraj")
                .cast(&["Vijay", "Vijay Sethupathi"])
                .build(),
            movie(7, "Untitled Project").build(),
        ]
    }
}
