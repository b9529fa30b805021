use std::cmp::Ordering;

use crate::MediaItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Popularity,
    Date,
    Title,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Popularity, SortKey::Date, SortKey::Title];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "popularity" => Some(Self::Popularity),
            "date" => Some(Self::Date),
            "title" => Some(Self::Title),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Date => "date",
            Self::Title => "title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Popularity => "Popularité",
            Self::Date => "Date",
            Self::Title => "Titre",
        }
    }
}

/// Returns a newly ordered copy of `medias`; the input is never mutated.
/// `None` stands for an unrecognized sort key and keeps the input order.
pub fn sort_media(medias: &[MediaItem], key: Option<SortKey>) -> Vec<MediaItem> {
    let mut sorted = medias.to_vec();
    match key {
        // Stable sorts: tied items keep their input order.
        Some(SortKey::Popularity) => sorted.sort_by(|a, b| b.likes.cmp(&a.likes)),
        Some(SortKey::Date) => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        Some(SortKey::Title) => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        None => {}
    }
    sorted
}

/// Case-insensitive, diacritic-folded title order, so "Étude" sorts with
/// "Etude" rather than after every ASCII title.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    folded_chars(a)
        .cmp(folded_chars(b))
        .then_with(|| a.cmp(b))
}

fn folded_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .map(strip_diacritic)
}

fn strip_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
