#![allow(dead_code)]

//! Reference Parser — turns a loosely formatted citation into a validated `VerseRange`.
//!
//! Strategies run in a fixed, explicit order and the first one that resolves wins:
//!
//! 1. `NamedVerse` — an exact named-verse phrase is rewritten to its canonical
//!    `"chapter:verse"` form; parsing continues with the rewritten text.
//! 2. `Canonical` — the first `chapter:verse(-verse)?` occurrence, with chapter
//!    bounds and verse ordering validated. A failed validation falls through.
//! 3. `SurahName` — `(surah )? <name> (N | N:M)?`, name looked up in the surah
//!    table. Never yields a multi-verse range; a bare name means verse 1.
//!
//! So "36:1" never reaches the name lookup, and "surah al-baqarah 2:255" is
//! resolved by the canonical strategy.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::reference::aliases::{AliasTables, MAX_CHAPTER};
use crate::verses::models::VerseRange;

static CANONICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+):([0-9]+)(?:-([0-9]+))?").expect("valid canonical regex"));

static SURAH_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:surah\s+)?([a-z][a-z\s'-]*?)\s*(?:([0-9]+)(?::([0-9]+))?)?$")
        .expect("valid surah-name regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("reference must be a non-empty string")]
    InvalidInput,

    #[error("could not resolve reference '{reference}'")]
    UnresolvedReference { reference: String },
}

/// One parsing strategy. Order matters; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    NamedVerse,
    Canonical,
    SurahName,
}

/// The precedence used by `ReferenceParser::new`.
pub const DEFAULT_STRATEGIES: [Strategy; 3] =
    [Strategy::NamedVerse, Strategy::Canonical, Strategy::SurahName];

enum Outcome {
    Rewrite(String),
    Resolved(VerseRange),
    NoMatch,
}

impl Strategy {
    fn apply(self, text: &str, tables: &AliasTables) -> Outcome {
        match self {
            Strategy::NamedVerse => match tables.named_verse(text) {
                Some(reference) => Outcome::Rewrite(reference.to_string()),
                None => Outcome::NoMatch,
            },
            Strategy::Canonical => match_canonical(text),
            Strategy::SurahName => match_surah_name(text, tables),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReferenceParser {
    tables: Arc<AliasTables>,
    strategies: Vec<Strategy>,
}

impl ReferenceParser {
    pub fn new(tables: Arc<AliasTables>) -> Self {
        Self::with_strategies(tables, DEFAULT_STRATEGIES.to_vec())
    }

    pub fn with_strategies(tables: Arc<AliasTables>, strategies: Vec<Strategy>) -> Self {
        Self { tables, strategies }
    }

    pub fn tables(&self) -> &AliasTables {
        &self.tables
    }

    pub fn parse(&self, raw: &str) -> Result<VerseRange, ParseError> {
        let mut text = raw.trim().to_lowercase();
        if text.is_empty() {
            return Err(ParseError::InvalidInput);
        }

        for strategy in &self.strategies {
            match strategy.apply(&text, &self.tables) {
                Outcome::Rewrite(rewritten) => text = rewritten,
                Outcome::Resolved(range) => return Ok(range),
                Outcome::NoMatch => {}
            }
        }

        Err(ParseError::UnresolvedReference {
            reference: raw.to_string(),
        })
    }
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

fn match_canonical(text: &str) -> Outcome {
    let Some(caps) = CANONICAL_RE.captures(text) else {
        return Outcome::NoMatch;
    };
    let (Some(chapter), Some(from_verse)) = (number(&caps, 1), number(&caps, 2)) else {
        return Outcome::NoMatch;
    };
    let to_verse = match caps.get(3) {
        Some(_) => match number(&caps, 3) {
            Some(v) => v,
            None => return Outcome::NoMatch,
        },
        None => from_verse,
    };

    if (1..=MAX_CHAPTER).contains(&chapter) && from_verse >= 1 && to_verse >= from_verse {
        Outcome::Resolved(VerseRange::new(chapter, from_verse, to_verse))
    } else {
        Outcome::NoMatch
    }
}

fn match_surah_name(text: &str, tables: &AliasTables) -> Outcome {
    let Some(caps) = SURAH_NAME_RE.captures(text) else {
        return Outcome::NoMatch;
    };
    let name = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
    // Chapter bounds are trusted to the closed alias table.
    let Some(chapter) = tables.surah(&name) else {
        return Outcome::NoMatch;
    };

    let verse = if caps.get(3).is_some() {
        number(&caps, 3)
    } else if caps.get(2).is_some() {
        number(&caps, 2)
    } else {
        Some(1)
    };

    match verse {
        Some(v) if v >= 1 => Outcome::Resolved(VerseRange::single(chapter, v)),
        _ => Outcome::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ReferenceParser {
        ReferenceParser::new(Arc::new(AliasTables::builtin()))
    }

    #[test]
    fn test_canonical_single_verse() {
        assert_eq!(parser().parse("2:255"), Ok(VerseRange::new(2, 255, 255)));
    }

    #[test]
    fn test_canonical_range() {
        assert_eq!(parser().parse("2:255-257"), Ok(VerseRange::new(2, 255, 257)));
    }

    #[test]
    fn test_canonical_inputs_are_exact_for_every_chapter() {
        let p = parser();
        for chapter in 1..=MAX_CHAPTER {
            for verse in [1, 7, 286] {
                let raw = format!("{chapter}:{verse}");
                assert_eq!(p.parse(&raw), Ok(VerseRange::single(chapter, verse)), "{raw}");
            }
        }
    }

    #[test]
    fn test_canonical_ranges_keep_both_ends() {
        let p = parser();
        for (from, to) in [(1, 1), (1, 5), (10, 12), (255, 300)] {
            let raw = format!("3:{from}-{to}");
            assert_eq!(p.parse(&raw), Ok(VerseRange::new(3, from, to)), "{raw}");
        }
    }

    #[test]
    fn test_named_verse_alias() {
        assert_eq!(parser().parse("ayat al-kursi"), Ok(VerseRange::single(2, 255)));
        assert_eq!(parser().parse("  Throne Verse "), Ok(VerseRange::single(2, 255)));
    }

    #[test]
    fn test_every_named_verse_resolves_like_its_target() {
        let p = parser();
        for (phrase, reference) in p.tables().named_verse_entries() {
            assert_eq!(p.parse(phrase), p.parse(reference), "{phrase}");
            assert!(p.parse(phrase).is_ok(), "{phrase}");
        }
    }

    #[test]
    fn test_surah_name_alone_defaults_to_first_verse() {
        assert_eq!(parser().parse("surah yasin"), Ok(VerseRange::single(36, 1)));
        assert_eq!(parser().parse("surah al-mulk"), Ok(VerseRange::single(67, 1)));
    }

    #[test]
    fn test_every_surah_key_resolves_with_and_without_verse() {
        let p = parser();
        for (name, chapter) in p.tables().surah_entries() {
            assert_eq!(p.parse(name), Ok(VerseRange::single(chapter, 1)), "{name}");
            assert_eq!(
                p.parse(&format!("{name} 5")),
                Ok(VerseRange::single(chapter, 5)),
                "{name} 5"
            );
        }
    }

    #[test]
    fn test_surah_name_with_chapter_and_verse_uses_canonical_path() {
        assert_eq!(
            parser().parse("Surah Al-Baqarah 2:255"),
            Ok(VerseRange::single(2, 255))
        );
    }

    #[test]
    fn test_surah_name_with_invalid_canonical_uses_trailing_verse() {
        // "0:3" fails chapter bounds, so the name decides the chapter.
        assert_eq!(parser().parse("kahf 0:3"), Ok(VerseRange::single(18, 3)));
    }

    #[test]
    fn test_surah_name_form_never_yields_a_range() {
        let err = parser().parse("surah al-baqarah 2-4").unwrap_err();
        assert!(matches!(err, ParseError::UnresolvedReference { .. }));
    }

    #[test]
    fn test_surah_name_verse_zero_is_unresolved() {
        assert!(parser().parse("yasin 0").is_err());
    }

    #[test]
    fn test_chapter_out_of_bounds_is_unresolved() {
        assert!(parser().parse("115:1").is_err());
        assert!(parser().parse("0:1").is_err());
    }

    #[test]
    fn test_inverted_range_is_unresolved() {
        assert!(parser().parse("2:10-5").is_err());
    }

    #[test]
    fn test_overflowing_numbers_are_unresolved() {
        assert!(parser().parse("2:99999999999999999999").is_err());
    }

    #[test]
    fn test_unresolved_echoes_original_input() {
        let err = parser().parse("Not A Reference").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnresolvedReference {
                reference: "Not A Reference".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert_eq!(parser().parse(""), Err(ParseError::InvalidInput));
        assert_eq!(parser().parse("   "), Err(ParseError::InvalidInput));
    }

    #[test]
    fn test_substituted_tables() {
        let tables = AliasTables::new(
            [("light verse".to_string(), "24:35".to_string())],
            [("al-ikhlas".to_string(), 112)],
        );
        let p = ReferenceParser::new(Arc::new(tables));
        assert_eq!(p.parse("light verse"), Ok(VerseRange::single(24, 35)));
        assert_eq!(p.parse("surah al-ikhlas 3"), Ok(VerseRange::single(112, 3)));
        assert!(p.parse("ayat al-kursi").is_err());
    }

    #[test]
    fn test_strategy_order_is_configurable() {
        let p = ReferenceParser::with_strategies(
            Arc::new(AliasTables::builtin()),
            vec![Strategy::Canonical],
        );
        assert!(p.parse("ayat al-kursi").is_err());
        assert!(p.parse("2:255").is_ok());
    }
}
