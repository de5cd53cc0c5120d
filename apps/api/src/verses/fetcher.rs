//! Verse Fetcher — the boundary to the upstream verse data source.
//!
//! `AppState` holds an `Arc<dyn VerseFetcher>`; the default backend is
//! `QuranApiClient`. Tests swap in an in-memory implementation.

use async_trait::async_trait;
use thiserror::Error;

use crate::verses::models::FetchedVerses;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No verses found for the provided reference")]
    NoVerses,
}

#[async_trait]
pub trait VerseFetcher: Send + Sync {
    /// Fetches verses `from_verse..=to_verse` of `chapter` plus the chapter's metadata.
    async fn fetch_verses(
        &self,
        chapter: u32,
        from_verse: u32,
        to_verse: u32,
    ) -> Result<FetchedVerses, FetchError>;
}
