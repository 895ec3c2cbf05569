//! Best-effort enrichment of a new record from TMDB search.
//!
//! A lookup never fails: every problem collapses to [`Metadata::unknown`].

use crate::clients::tmdb::{SearchKind, SearchResult, SearchTransport, TmdbClient};
use crate::constants::tmdb::{DEFAULT_LANGUAGE, GENRE_LABELS};
use crate::constants::{UNKNOWN, limits};
use crate::models::Metadata;
use tracing::{debug, warn};

/// Settings passed into every lookup. There is no ambient key.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub api_key: Option<String>,
    pub language: String,
}

impl LookupConfig {
    #[must_use]
    pub fn new(api_key: Option<String>, language: impl Into<String>) -> Self {
        Self {
            api_key,
            language: language.into(),
        }
    }

    /// The key, if one is set and not blank.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_LANGUAGE)
    }
}

pub struct MetadataLookup<T = TmdbClient> {
    transport: T,
}

impl<T: SearchTransport> MetadataLookup<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn lookup(&self, title: &str, is_series: bool, config: &LookupConfig) -> Metadata {
        let Some(api_key) = config.key() else {
            debug!("No TMDB API key configured, skipping lookup for '{title}'");
            return Metadata::unknown();
        };

        let kind = SearchKind::from_is_series(is_series);
        let results = match self
            .transport
            .search(kind, title, api_key, &config.language)
            .await
        {
            Ok(results) => results,
            Err(e) => {
                warn!("Metadata lookup for '{title}' failed: {e}");
                return Metadata::unknown();
            }
        };

        let Some(first) = results.first() else {
            debug!("No TMDB results for '{title}'");
            return Metadata::unknown();
        };

        metadata_from_result(first, kind)
    }
}

fn metadata_from_result(result: &SearchResult, kind: SearchKind) -> Metadata {
    let (primary, fallback) = match kind {
        SearchKind::Tv => (&result.first_air_date, &result.release_date),
        SearchKind::Movie => (&result.release_date, &result.first_air_date),
    };

    let year = year_prefix(primary.as_deref())
        .or_else(|| year_prefix(fallback.as_deref()))
        .unwrap_or(UNKNOWN)
        .to_string();

    let parts = match kind {
        SearchKind::Tv => result
            .number_of_seasons
            .filter(|&n| n >= 1)
            .unwrap_or(limits::DEFAULT_PARTS),
        SearchKind::Movie => limits::DEFAULT_PARTS,
    };

    Metadata {
        year,
        genre: genre_label(&result.genre_ids).to_string(),
        parts,
    }
}

fn year_prefix(date: Option<&str>) -> Option<&str> {
    let date = date?.trim();
    if date.chars().count() < 4 {
        return None;
    }
    let end = date.char_indices().nth(4).map_or(date.len(), |(i, _)| i);
    Some(&date[..end])
}

/// Maps genre ids to a coarse label through a fixed two-entry table.
#[must_use]
pub fn genre_label(genre_ids: &[i64]) -> &'static str {
    GENRE_LABELS
        .iter()
        .find(|(id, _)| genre_ids.contains(id))
        .map_or(UNKNOWN, |&(_, label)| label)
}
