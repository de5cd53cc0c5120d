//! Resolution service — raw reference string in, ordered verse records out.
//!
//! raw → parser → span policy → fetcher → assembler. The policy runs before
//! the fetcher so oversized requests never reach the upstream.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::reference::parser::{ParseError, ReferenceParser};
use crate::reference::policy::{check_span, PolicyViolation};
use crate::verses::assembler::assemble;
use crate::verses::fetcher::{FetchError, VerseFetcher};
use crate::verses::models::{VerseRange, VerseRecord};

/// Everything `resolve_and_assemble` can fail with.
///
/// Parse and policy failures keep their own wording. Upstream failures carry a
/// short message for callers; the fetch error is kept as the source so the
/// outermost layer can log it.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Policy(#[from] PolicyViolation),

    #[error("verse data unavailable: {message}")]
    Upstream {
        message: String,
        #[source]
        source: FetchError,
    },
}

impl From<FetchError> for ResolveError {
    fn from(source: FetchError) -> Self {
        let message = match source {
            FetchError::NoVerses => "no verses found for the provided reference",
            FetchError::Api { .. } | FetchError::Http(_) => "the verse data source is unreachable",
            FetchError::Parse(_) => "the verse data source returned an unexpected response",
        };
        ResolveError::Upstream {
            message: message.to_string(),
            source,
        }
    }
}

#[derive(Clone)]
pub struct VerseService {
    parser: ReferenceParser,
    fetcher: Arc<dyn VerseFetcher>,
}

impl VerseService {
    pub fn new(parser: ReferenceParser, fetcher: Arc<dyn VerseFetcher>) -> Self {
        Self { parser, fetcher }
    }

    /// Parses and span-checks without touching the upstream.
    pub fn resolve(&self, raw: &str) -> Result<(VerseRange, u32), ResolveError> {
        let range = self.parser.parse(raw)?;
        let span = check_span(&range)?;
        Ok((range, span))
    }

    pub async fn resolve_and_assemble(&self, raw: &str) -> Result<Vec<VerseRecord>, ResolveError> {
        let (range, span) = self.resolve(raw)?;

        info!(
            "Fetching chapter {}, verses {} to {} ({} verses)",
            range.chapter, range.from_verse, range.to_verse, span
        );

        let fetched = self
            .fetcher
            .fetch_verses(range.chapter, range.from_verse, range.to_verse)
            .await?;

        if fetched.verses.is_empty() {
            return Err(FetchError::NoVerses.into());
        }

        Ok(assemble(&fetched.verses, &fetched.chapter_info))
    }
}
