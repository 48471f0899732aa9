//! Sort step.

use std::cmp::Ordering;

use crate::catalog::Entry;

use super::query::{Category, SortDirection};

type Comparator = fn(&Entry, &Entry) -> Ordering;

fn by_popularity(a: &Entry, b: &Entry) -> Ordering {
    by_rating(a, b).then_with(|| by_year(a, b))
}

fn by_year(a: &Entry, b: &Entry) -> Ordering {
    a.year_value().cmp(&b.year_value())
}

fn by_rating(a: &Entry, b: &Entry) -> Ordering {
    a.rating_value().total_cmp(&b.rating_value())
}

fn by_title(a: &Entry, b: &Entry) -> Ordering {
    compare_titles(a.title_or_empty(), b.title_or_empty())
}

/// Ascending comparator for a category, or `None` when the category keeps
/// filter order.
fn comparator(category: Category) -> Option<Comparator> {
    match category {
        Category::Popular => Some(by_popularity),
        Category::ByYear => Some(by_year),
        Category::ByRating => Some(by_rating),
        Category::Alphabetical => Some(by_title),
        Category::Favorites => None,
    }
}

/// Sort `entries` in place for `category` and `direction`.
///
/// The sort is stable: entries with equal keys keep their relative order in
/// both directions.
pub fn sort_entries(entries: &mut [&Entry], category: Category, direction: SortDirection) {
    let Some(cmp) = comparator(category) else {
        return;
    };

    match direction {
        SortDirection::Ascending => entries.sort_by(|a, b| cmp(a, b)),
        SortDirection::Descending => entries.sort_by(|a, b| cmp(b, a)),
    }
}

/// Title order: case- and accent-insensitive first, lowercase before
/// uppercase when titles differ only by case.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| case_order(a, b))
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Lowercased text with Latin diacritics folded to their base letter.
pub fn collation_key(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(fold_diacritic)
        .collect()
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}
