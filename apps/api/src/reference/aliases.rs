#![allow(dead_code)]

//! Alias Tables — natural-language verse phrases and surah synonyms mapped to canonical ids.
//!
//! Built once at startup (`AliasTables::builtin`) and shared behind an `Arc`.
//! Tests construct substitute tables with `AliasTables::new`.

use std::collections::HashMap;

/// Highest chapter number in the text.
pub const MAX_CHAPTER: u32 = 114;

/// Named-verse phrase → canonical `"chapter:verse"`.
const NAMED_VERSES: &[(&str, &str)] = &[
    ("ayat al-kursi", "2:255"),
    ("al kursi", "2:255"),
    ("throne verse", "2:255"),
    ("surah yasin", "36:1"),
    ("yaseen", "36:1"),
    ("surah kahf", "18:1"),
    ("al kahf", "18:1"),
    ("surah fatihah", "1:1"),
    ("al fatihah", "1:1"),
    ("the opening", "1:1"),
];

/// Surah name or synonym → chapter number. Many-to-one.
const SURAHS: &[(&str, u32)] = &[
    ("al-fatihah", 1),
    ("fatihah", 1),
    ("the opening", 1),
    ("al-baqarah", 2),
    ("baqarah", 2),
    ("the cow", 2),
    ("ali imran", 3),
    ("imran", 3),
    ("family of imran", 3),
    ("an-nisa", 4),
    ("nisa", 4),
    ("women", 4),
    ("al-maidah", 5),
    ("maidah", 5),
    ("the table", 5),
    ("al-anam", 6),
    ("anam", 6),
    ("the cattle", 6),
    ("al-araf", 7),
    ("araf", 7),
    ("the heights", 7),
    ("al-anfal", 8),
    ("anfal", 8),
    ("the spoils of war", 8),
    ("at-tawbah", 9),
    ("tawbah", 9),
    ("the repentance", 9),
    ("yunus", 10),
    ("yasin", 36),
    ("ya-sin", 36),
    ("al-kahf", 18),
    ("kahf", 18),
    ("the cave", 18),
    ("ar-rahman", 55),
    ("rahman", 55),
    ("the beneficent", 55),
    ("al-mulk", 67),
    ("mulk", 67),
    ("the sovereignty", 67),
];

/// The two read-only lookup tables consulted by the parser.
#[derive(Debug, Clone, Default)]
pub struct AliasTables {
    named_verses: HashMap<String, String>,
    surahs: HashMap<String, u32>,
}

impl AliasTables {
    /// Builds tables from arbitrary pairs. Keys are normalized (trimmed, lowercased).
    pub fn new<N, S>(named_verses: N, surahs: S) -> Self
    where
        N: IntoIterator<Item = (String, String)>,
        S: IntoIterator<Item = (String, u32)>,
    {
        let mut tables = Self::default();
        for (phrase, reference) in named_verses {
            tables.insert_named_verse(&phrase, &reference);
        }
        for (name, chapter) in surahs {
            tables.insert_surah(&name, chapter);
        }
        tables
    }

    /// The tables shipped with the service.
    pub fn builtin() -> Self {
        Self::new(
            NAMED_VERSES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
            SURAHS.iter().map(|(k, v)| (k.to_string(), *v)),
        )
    }

    pub fn insert_named_verse(&mut self, phrase: &str, reference: &str) {
        self.named_verses
            .insert(normalize_key(phrase), reference.trim().to_string());
    }

    pub fn insert_surah(&mut self, name: &str, chapter: u32) {
        self.surahs.insert(normalize_key(name), chapter);
    }

    /// Canonical `"chapter:verse"` for a named verse phrase, if known.
    pub fn named_verse(&self, phrase: &str) -> Option<&str> {
        self.named_verses
            .get(&normalize_key(phrase))
            .map(String::as_str)
    }

    /// Chapter number for a surah name or synonym, if known.
    pub fn surah(&self, name: &str) -> Option<u32> {
        self.surahs.get(&normalize_key(name)).copied()
    }

    pub fn named_verse_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.named_verses
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn surah_entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.surahs.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}
