use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::constants::tmdb::{API_BASE, USER_AGENT};

/// Which TMDB search endpoint a query goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Movie,
    Tv,
}

impl SearchKind {
    #[must_use]
    pub const fn from_is_series(is_series: bool) -> Self {
        if is_series { Self::Tv } else { Self::Movie }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub number_of_seasons: Option<u32>,
}

/// One search call against the metadata service.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn search(
        &self,
        kind: SearchKind,
        query: &str,
        api_key: &str,
        language: &str,
    ) -> Result<Vec<SearchResult>>;
}

#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    base_url: String,
}

impl Default for TmdbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TmdbClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(API_BASE, None)
    }

    #[must_use]
    pub fn with_options(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn search_url(&self, kind: SearchKind, query: &str, api_key: &str, language: &str) -> String {
        format!(
            "{}/search/{}?api_key={}&query={}&language={}",
            self.base_url,
            kind.path(),
            urlencoding::encode(api_key),
            urlencoding::encode(query),
            urlencoding::encode(language)
        )
    }
}

#[async_trait]
impl SearchTransport for TmdbClient {
    async fn search(
        &self,
        kind: SearchKind,
        query: &str,
        api_key: &str,
        language: &str,
    ) -> Result<Vec<SearchResult>> {
        let url = self.search_url(kind, query, api_key, language);
        debug!("TMDB search: {} '{}'", kind.path(), query);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("TMDB API error: {status} - {body}"));
        }

        let response: SearchResponse = response.json().await?;

        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metadata;
    use crate::services::metadata::{LookupConfig, MetadataLookup};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const UNAUTHORIZED: &str = "HTTP/1.1 401 Unauthorized\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}";

    const NOT_JSON: &str = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!";

    /// Answers one request per canned response, in order.
    async fn serve(responses: Vec<&'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            for response in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.ok();
            }
        });

        format!("http://{addr}/3")
    }

    #[tokio::test]
    async fn test_error_status_and_bad_body_are_errors() {
        let base = serve(vec![UNAUTHORIZED, NOT_JSON]).await;
        let client = TmdbClient::with_options(&base, Some(Duration::from_secs(5)));

        let unauthorized = client.search(SearchKind::Movie, "Alien", "bad-key", "ru-RU").await;
        assert!(unauthorized.is_err());

        let not_json = client.search(SearchKind::Tv, "Dark", "key", "ru-RU").await;
        assert!(not_json.is_err());
    }

    #[tokio::test]
    async fn test_lookup_through_client_falls_back_to_unknown() {
        let base = serve(vec![UNAUTHORIZED, NOT_JSON]).await;
        let client = TmdbClient::with_options(&base, Some(Duration::from_secs(5)));
        let lookup = MetadataLookup::new(client);
        let config = LookupConfig::new(Some("key".to_string()), "ru-RU");

        assert_eq!(
            lookup.lookup("Alien", false, &config).await,
            Metadata::unknown()
        );
        assert_eq!(
            lookup.lookup("Dark", true, &config).await,
            Metadata::unknown()
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let client = TmdbClient::with_options("https://tmdb.test/3/", None);
        let url = client.search_url(SearchKind::Tv, "Во все тяжкие & co", "k3y", "ru-RU");

        assert!(url.starts_with("https://tmdb.test/3/search/tv?"));
        assert!(url.contains("api_key=k3y"));
        assert!(url.contains("language=ru-RU"));
        assert!(!url.contains(' '));
        assert!(!url.contains("& co"));
    }

    #[test]
    fn test_search_response_tolerates_missing_fields() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 1396, "name": "Breaking Bad", "first_air_date": "2008-01-20", "genre_ids": [18, 80]},
                {"id": 2, "release_date": null}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].first_air_date.as_deref(), Some("2008-01-20"));
        assert_eq!(response.results[0].genre_ids, vec![18, 80]);
        assert!(response.results[1].genre_ids.is_empty());
        assert_eq!(response.results[1].number_of_seasons, None);
    }

    #[test]
    fn test_kind_from_series_flag() {
        assert_eq!(SearchKind::from_is_series(true).path(), "tv");
        assert_eq!(SearchKind::from_is_series(false).path(), "movie");
    }
}
