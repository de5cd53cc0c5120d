use crate::verses::service::VerseService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Parser + pluggable fetcher. Default fetcher: `QuranApiClient`.
    pub verses: VerseService,
}
