//! Verse Record Assembler — merges fetched verses with chapter metadata.
//!
//! Output order and length always match the input. Position and total are
//! recomputed from the input sequence, not taken from the fetcher.

use crate::verses::models::{ChapterInfo, RawVerse, VerseRecord};

pub const TRANSLATION_PLACEHOLDER: &str = "Translation not available";

pub fn assemble(raw_verses: &[RawVerse], chapter_info: &ChapterInfo) -> Vec<VerseRecord> {
    let total = raw_verses.len();

    raw_verses
        .iter()
        .enumerate()
        .map(|(index, verse)| VerseRecord {
            reference: format!(
                "{} {}:{}",
                chapter_info.simple_name, verse.chapter_id, verse.verse_number
            ),
            original_text: verse.original_text.clone(),
            translation: pick_translation(&verse.translations).to_string(),
            chapter_name: chapter_info.simple_name.clone(),
            verse_number: verse.verse_number,
            position: index + 1,
            total,
        })
        .collect()
}

/// First candidate wins; candidates are already in preference order.
fn pick_translation(candidates: &[String]) -> &str {
    match candidates.first() {
        Some(text) if !text.trim().is_empty() => text,
        _ => TRANSLATION_PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter() -> ChapterInfo {
        ChapterInfo {
            id: 2,
            simple_name: "Al-Baqarah".to_string(),
            original_name: "البقرة".to_string(),
        }
    }

    fn raw(verse_number: u32, translations: &[&str]) -> RawVerse {
        RawVerse {
            chapter_id: 2,
            verse_number,
            original_text: format!("arabic {verse_number}"),
            translations: translations.iter().map(|t| t.to_string()).collect(),
            position: 0,
            total: 0,
        }
    }

    #[test]
    fn test_assembles_reference_and_copies_fields() {
        let records = assemble(&[raw(255, &["Allah - there is no deity except Him"])], &chapter());
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.reference, "Al-Baqarah 2:255");
        assert_eq!(record.original_text, "arabic 255");
        assert_eq!(record.translation, "Allah - there is no deity except Him");
        assert_eq!(record.chapter_name, "Al-Baqarah");
        assert_eq!(record.verse_number, 255);
        assert_eq!((record.position, record.total), (1, 1));
    }

    #[test]
    fn test_first_translation_candidate_wins() {
        let records = assemble(&[raw(1, &["first", "second"])], &chapter());
        assert_eq!(records[0].translation, "first");
    }

    #[test]
    fn test_missing_translation_falls_back_to_placeholder() {
        let records = assemble(&[raw(1, &[]), raw(2, &[""])], &chapter());
        assert!(records
            .iter()
            .all(|r| r.translation == TRANSLATION_PLACEHOLDER));
    }

    #[test]
    fn test_positions_and_total() {
        let input = vec![raw(255, &["a"]), raw(256, &["b"]), raw(257, &["c"])];
        let records = assemble(&input, &chapter());
        let positions: Vec<_> = records.iter().map(|r| (r.position, r.total)).collect();
        assert_eq!(positions, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_is_idempotent() {
        let input = vec![raw(1, &["a"]), raw(2, &[])];
        assert_eq!(assemble(&input, &chapter()), assemble(&input, &chapter()));
    }

    #[test]
    fn test_reversed_input_reverses_output() {
        let input = vec![raw(255, &["a"]), raw(256, &["b"]), raw(257, &["c"])];
        let mut reversed = input.clone();
        reversed.reverse();

        let records = assemble(&reversed, &chapter());
        let verses: Vec<_> = records.iter().map(|r| r.verse_number).collect();
        assert_eq!(verses, vec![257, 256, 255]);
        assert_eq!(records[0].position, 1);
        assert_eq!(records[2].position, 3);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(assemble(&[], &chapter()).is_empty());
    }
}
