/// Quran API client — the default `VerseFetcher`, backed by the quran.com v4 REST API.
///
/// Two calls per range: the verses themselves (with translations) and the
/// chapter metadata used for display names.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::verses::fetcher::{FetchError, VerseFetcher};
use crate::verses::models::{ChapterInfo, FetchedVerses, RawVerse};

pub const DEFAULT_BASE_URL: &str = "https://api.quran.com/api/v4";
/// Translation resource ids, in preference order.
pub const DEFAULT_TRANSLATION_IDS: &[u32] = &[21, 20, 19, 131, 85];
/// First retry waits this long; each further retry doubles it.
pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Deserialize)]
struct VersesResponse {
    #[serde(default)]
    verses: Vec<ApiVerse>,
}

#[derive(Debug, Deserialize)]
struct ApiVerse {
    verse_number: u32,
    #[serde(default)]
    chapter_id: Option<u32>,
    #[serde(default)]
    verse_key: Option<String>,
    #[serde(default)]
    text_uthmani: String,
    #[serde(default)]
    translations: Option<Vec<ApiTranslation>>,
}

#[derive(Debug, Deserialize)]
struct ApiTranslation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ChapterResponse {
    chapter: ApiChapter,
}

#[derive(Debug, Deserialize)]
struct ApiChapter {
    id: u32,
    name_simple: String,
    name_arabic: String,
}

impl ApiVerse {
    /// Chapter id, falling back to the `"c:v"` verse key, then the requested chapter.
    fn chapter(&self, requested: u32) -> u32 {
        self.chapter_id
            .or_else(|| {
                self.verse_key
                    .as_deref()
                    .and_then(|key| key.split_once(':'))
                    .and_then(|(c, _)| c.parse().ok())
            })
            .unwrap_or(requested)
    }
}

#[derive(Clone)]
pub struct QuranApiClient {
    client: Client,
    base_url: String,
    translation_ids: Vec<u32>,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl QuranApiClient {
    pub fn new(
        base_url: impl Into<String>,
        translation_ids: Vec<u32>,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            translation_ids,
            max_retries: max_retries.max(1),
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
        })
    }

    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(
            config.quran_api_base_url.clone(),
            config.translation_ids.clone(),
            Duration::from_secs(config.quran_api_timeout_secs),
            config.quran_api_max_retries,
        )?
        .with_retry_base_delay(Duration::from_millis(config.quran_api_retry_base_ms)))
    }

    fn verses_url(&self, chapter: u32, from_verse: u32, to_verse: u32) -> String {
        let translations = self
            .translation_ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}/verses/by_chapter/{chapter}?from={from_verse}&to={to_verse}&words=false&translations={translations}&fields=text_uthmani,chapter_id",
            self.base_url
        )
    }

    fn chapter_url(&self, chapter: u32) -> String {
        format!("{}/chapters/{chapter}?language=en", self.base_url)
    }

    /// GETs `url` and decodes the JSON body.
    /// Retries on 429, 5xx and transport errors with exponential backoff.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let mut last_error: Option<FetchError> = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                // base, 2×base, 4×base, ...
                let delay = self.retry_base_delay * (1 << (attempt - 1));
                warn!(
                    "Quran API attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.get(url).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(FetchError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                warn!("Quran API returned {} for {}", status, url);
                last_error = Some(FetchError::Api {
                    status: status.as_u16(),
                });
                continue;
            }

            if !status.is_success() {
                return Err(FetchError::Api {
                    status: status.as_u16(),
                });
            }

            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        Err(last_error.unwrap_or(FetchError::Api { status: 503 }))
    }
}

#[async_trait]
impl VerseFetcher for QuranApiClient {
    async fn fetch_verses(
        &self,
        chapter: u32,
        from_verse: u32,
        to_verse: u32,
    ) -> Result<FetchedVerses, FetchError> {
        let verses: VersesResponse = self
            .get_json(&self.verses_url(chapter, from_verse, to_verse))
            .await?;
        let verses = into_raw_verses(verses, chapter)?;

        let chapter_response: ChapterResponse = self.get_json(&self.chapter_url(chapter)).await?;

        debug!(
            "Fetched {} verses of chapter {} ({})",
            verses.len(),
            chapter,
            chapter_response.chapter.name_simple
        );

        Ok(FetchedVerses {
            verses,
            chapter_info: into_chapter_info(chapter_response),
        })
    }
}

fn into_raw_verses(response: VersesResponse, chapter: u32) -> Result<Vec<RawVerse>, FetchError> {
    if response.verses.is_empty() {
        return Err(FetchError::NoVerses);
    }

    let total = response.verses.len();
    Ok(response
        .verses
        .into_iter()
        .enumerate()
        .map(|(index, verse)| RawVerse {
            chapter_id: verse.chapter(chapter),
            verse_number: verse.verse_number,
            original_text: verse.text_uthmani,
            translations: verse
                .translations
                .unwrap_or_default()
                .into_iter()
                .map(|t| t.text)
                .collect(),
            position: index + 1,
            total,
        })
        .collect())
}

fn into_chapter_info(response: ChapterResponse) -> ChapterInfo {
    ChapterInfo {
        id: response.chapter.id,
        simple_name: response.chapter.name_simple,
        original_name: response.chapter.name_arabic,
    }
}
