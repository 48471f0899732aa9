//! Built-in sample catalog, shown when no data source can be loaded.

use serde_json::{json, Map, Value};

use super::Entry;

/// The two-movie sample dataset.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        Entry {
            id: 1,
            title: Some("Baahubali: The Beginning".to_string()),
            year: Some("2015".to_string()),
            rating: Some("8.1".to_string()),
            genre: Some("Action, Drama".to_string()),
            cast: Some(names(&["Prabhas", "Rana Daggubati", "Anushka Shetty"])),
            director: Some("S.S. Rajamouli".to_string()),
            image: Some(
                "https://m.media-amazon.com/images/M/MV5BYWVlMjVhZWYtNWViNC00ODFkLTk1MmItYjU1MDY5ZDdhZWUzXkEyXkFqcGc@._V1_QL75_UX90_CR0,0,90,133_.jpg"
                    .to_string(),
            ),
            poster: Some(
                "https://m.media-amazon.com/images/M/MV5BYWVlMjVhZWYtNWViNC00ODFkLTk1MmItYjU1MDY5ZDdhZWUzXkEyXkFqcGc@._V1_SX300.jpg"
                    .to_string(),
            ),
            extra: details(&[
                ("released", json!("10 Jul 2015")),
                ("runtime", json!("159 min")),
                ("writer", json!("Vijayendra Prasad, S.S. Rajamouli")),
                (
                    "plot",
                    json!("In ancient India, an adventurous and daring man becomes involved in a decades-old feud between two warring peoples."),
                ),
                ("awards", json!("62 wins & 12 nominations")),
                ("streaming", json!(["Netflix", "Prime"])),
            ]),
        },
        Entry {
            id: 2,
            title: Some("Petta".to_string()),
            year: Some("2019".to_string()),
            rating: Some("7.3".to_string()),
            genre: Some("Action, Drama".to_string()),
            cast: Some(names(&["Rajinikanth", "Vijay Sethupathi", "Simran"])),
            director: Some("Karthik Subbaraj".to_string()),
            image: Some(
                "https://m.media-amazon.com/images/M/MV5BMjI0NzcyMjg5N15BMl5BanBnXkFtZTgwNDI4ODQyNTM@._V1_QL75_UX90_CR0,0,90,133_.jpg"
                    .to_string(),
            ),
            poster: Some(
                "https://m.media-amazon.com/images/M/MV5BMjI0NzcyMjg5N15BMl5BanBnXkFtZTgwNDI4ODQyNTM@._V1_SX300.jpg"
                    .to_string(),
            ),
            extra: details(&[
                ("released", json!("10 Jan 2019")),
                ("runtime", json!("171 min")),
                ("writer", json!("Karthik Subbaraj")),
                (
                    "plot",
                    json!("A retired RAW agent returns to his hometown and gets involved in a gang war."),
                ),
                ("awards", json!("6 wins & 8 nominations")),
                ("streaming", json!(["Hotstar", "Netflix"])),
            ]),
        },
    ]
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn details(fields: &[(&str, Value)]) -> Map<String, Value> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_unique() {
        let entries = sample_entries();
        assert_eq!(entries.len(), 2);
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_sample_round_trips_through_json() {
        let entries = sample_entries();
        let json = serde_json::to_string(&entries).unwrap();
        let parsed: Vec<Entry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries);
    }
}
