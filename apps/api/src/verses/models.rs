#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// A resolved `{chapter, fromVerse, toVerse}` range.
///
/// Construction does not enforce the span limit; that is `reference::policy::check_span`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRange {
    pub chapter: u32,
    pub from_verse: u32,
    pub to_verse: u32,
}

impl VerseRange {
    pub fn new(chapter: u32, from_verse: u32, to_verse: u32) -> Self {
        Self {
            chapter,
            from_verse,
            to_verse,
        }
    }

    pub fn single(chapter: u32, verse: u32) -> Self {
        Self::new(chapter, verse, verse)
    }

    /// `to_verse - from_verse + 1`. Signed so malformed ranges report a non-positive span.
    pub fn span(&self) -> i64 {
        i64::from(self.to_verse) - i64::from(self.from_verse) + 1
    }
}

/// One verse as returned by a `VerseFetcher`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawVerse {
    pub chapter_id: u32,
    pub verse_number: u32,
    pub original_text: String,
    /// Translation candidates in preference order. May be empty.
    pub translations: Vec<String>,
    pub position: usize,
    pub total: usize,
}

/// Display metadata for a chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterInfo {
    pub id: u32,
    pub simple_name: String,
    pub original_name: String,
}

/// Everything a fetcher returns for one range.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedVerses {
    pub verses: Vec<RawVerse>,
    pub chapter_info: ChapterInfo,
}

/// The normalized per-verse output record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRecord {
    /// `"ChapterName chapter:verse"`
    pub reference: String,
    #[serde(rename = "arabic")]
    pub original_text: String,
    /// Never empty.
    pub translation: String,
    pub chapter_name: String,
    pub verse_number: u32,
    pub position: usize,
    pub total: usize,
}
