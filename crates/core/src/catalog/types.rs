//! Types for the movie catalog.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Leading float literal, the way a lenient numeric parse reads it.
static FLOAT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap());

/// Leading integer literal.
static INT_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+").unwrap());

/// Identifier of a catalog entry.
pub type EntryId = i64;

/// One movie in the catalog.
///
/// Numeric-like fields (`year`, `rating`) are kept as the text the data
/// source supplied and parsed on demand, so a snapshot round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "RawEntry")]
pub struct Entry {
    /// Stable identifier. Source documents call it `index`.
    pub id: EntryId,
    /// Display title.
    pub title: Option<String>,
    /// Release year, integer-like.
    pub year: Option<String>,
    /// Rating out of 10, numeric-like.
    pub rating: Option<String>,
    /// Comma-separated genre list (e.g. "Action, Drama").
    pub genre: Option<String>,
    /// Cast in billing order.
    pub cast: Option<Vec<String>>,
    /// Director name.
    pub director: Option<String>,
    /// Thumbnail image URL.
    pub image: Option<String>,
    /// Full-size poster URL.
    pub poster: Option<String>,
    /// Everything else (plot, runtime, writer, awards, streaming, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Entry as it appears on the wire: `index` and `id` may both be present.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    index: Option<EntryId>,
    #[serde(default)]
    id: Option<EntryId>,
    #[serde(default, deserialize_with = "scalar_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    year: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    rating: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    genre: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    cast: Option<Vec<String>>,
    #[serde(default, deserialize_with = "scalar_text")]
    director: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    image: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    poster: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawEntry> for Entry {
    type Error = String;

    /// `index` wins when both keys are present.
    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let id = raw
            .index
            .or(raw.id)
            .ok_or_else(|| "missing field `index`".to_string())?;

        Ok(Self {
            id,
            title: raw.title,
            year: raw.year,
            rating: raw.rating,
            genre: raw.genre,
            cast: raw.cast,
            director: raw.director,
            image: raw.image,
            poster: raw.poster,
            extra: raw.extra,
        })
    }
}

impl Entry {
    /// Create an entry with only an id and title; other fields absent.
    pub fn new(id: EntryId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            year: None,
            rating: None,
            genre: None,
            cast: None,
            director: None,
            image: None,
            poster: None,
            extra: Map::new(),
        }
    }

    /// Rating as a float; absent or unparsable ratings count as 0.
    pub fn rating_value(&self) -> f64 {
        self.rating.as_deref().and_then(parse_float_prefix).unwrap_or(0.0)
    }

    /// Year as an integer; absent or unparsable years count as 0.
    pub fn year_value(&self) -> i64 {
        self.year.as_deref().and_then(parse_int_prefix).unwrap_or(0)
    }

    /// Title, or the empty string when absent.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Image to display: the poster when present, else the thumbnail.
    /// Empty URLs count as absent.
    pub fn image_ref(&self) -> Option<&str> {
        let present = |url: &&str| !url.trim().is_empty();
        self.poster
            .as_deref()
            .filter(present)
            .or(self.image.as_deref().filter(present))
    }

    /// Individual genre names, trimmed, empty tokens skipped.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }

    /// Cast members, or an empty slice when the entry has no cast.
    pub fn cast_members(&self) -> &[String] {
        self.cast.as_deref().unwrap_or(&[])
    }
}

/// Parse the leading float of `s` (surrounding whitespace ignored).
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    FLOAT_PREFIX
        .find(s.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse the leading integer of `s` (surrounding whitespace ignored).
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    INT_PREFIX
        .find(s.trim_start())
        .and_then(|m| m.as_str().parse().ok())
}

/// Accept any JSON scalar as text. `null` and the literal string `"null"`
/// both mean absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if s == "null" => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Accept a list of names; non-string items are dropped, any other shape is
/// treated as absent.
fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_source_document_entry() {
        let json = r#"{
            "index": 1,
            "title": "Baahubali: The Beginning",
            "year": "2015",
            "rating": "8.1",
            "image": "https://example.com/thumb.jpg",
            "cast": ["Prabhas", "Rana Daggubati", "Anushka Shetty"],
            "director": "S.S. Rajamouli",
            "genre": "Action, Drama",
            "runtime": "159 min",
            "streaming": ["Netflix", "Prime"]
        }"#;

        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.title.as_deref(), Some("Baahubali: The Beginning"));
        assert_eq!(entry.year_value(), 2015);
        assert!((entry.rating_value() - 8.1).abs() < f64::EPSILON);
        assert_eq!(entry.cast_members().len(), 3);
        assert_eq!(entry.genres().collect::<Vec<_>>(), vec!["Action", "Drama"]);
        assert_eq!(entry.extra["runtime"], "159 min");
        assert!(entry.extra.contains_key("streaming"));
    }

    #[test]
    fn test_null_like_values_are_absent() {
        let json = r#"{"id": 7, "title": null, "year": "null", "rating": null}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(entry.title.is_none());
        assert!(entry.year.is_none());
        assert!(entry.rating.is_none());
        assert!(entry.cast.is_none());
        assert_eq!(entry.rating_value(), 0.0);
        assert_eq!(entry.year_value(), 0);
        assert_eq!(entry.title_or_empty(), "");
    }

    #[test]
    fn test_numeric_scalars_become_text() {
        let json = r#"{"id": 3, "year": 2019, "rating": 7.3}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.year.as_deref(), Some("2019"));
        assert_eq!(entry.rating.as_deref(), Some("7.3"));
    }

    #[test]
    fn test_lenient_number_parsing() {
        assert_eq!(parse_float_prefix("7.3/10"), Some(7.3));
        assert_eq!(parse_float_prefix("  8"), Some(8.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("N/A"), None);
        assert_eq!(parse_int_prefix("2015–2016"), Some(2015));
        assert_eq!(parse_int_prefix("19.5"), Some(19));
        assert_eq!(parse_int_prefix("unknown"), None);
    }

    #[test]
    fn test_poster_preferred_over_image() {
        let mut entry = Entry::new(1, "Petta");
        entry.image = Some("thumb.jpg".to_string());
        assert_eq!(entry.image_ref(), Some("thumb.jpg"));
        entry.poster = Some("poster.jpg".to_string());
        assert_eq!(entry.image_ref(), Some("poster.jpg"));
    }

    #[test]
    fn test_empty_image_urls_are_absent() {
        let mut entry = Entry::new(1, "Petta");
        entry.image = Some(String::new());
        assert_eq!(entry.image_ref(), None);
        entry.poster = Some(" ".to_string());
        entry.image = Some("thumb.jpg".to_string());
        assert_eq!(entry.image_ref(), Some("thumb.jpg"));
    }

    #[test]
    fn test_index_and_id_both_present() {
        let json = r#"{"index": 4, "id": 9, "title": "Petta"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 4);
        assert!(!entry.extra.contains_key("id"));

        let entries: Vec<Entry> = serde_json::from_str(
            r#"[{"index": 1, "id": 1, "title": "Petta"}, {"index": 2, "title": "Vikram"}]"#,
        )
        .unwrap();
        assert_eq!(entries.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = serde_json::from_str::<Entry>(r#"{"title": "Petta"}"#).unwrap_err();
        assert!(err.to_string().contains("index"));
    }

    #[test]
    fn test_serialization_keeps_passthrough_fields() {
        let json = r#"{"index": 2, "title": "Petta", "plot": "A warden...", "awards": "6 wins"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&entry).unwrap();
        assert_eq!(out["id"], 2);
        assert_eq!(out["plot"], "A warden...");
        assert_eq!(out["awards"], "6 wins");
    }
}
