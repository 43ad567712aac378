//! Deezer public search API implementation of [`MusicSearch`].

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::config::{mask_token, MusicApiConfig};
use crate::error::{MusicApiError, Result};
use crate::track::{Track, Tracks};
use crate::MusicSearch;

const UNTITLED: &str = "Untitled";
const UNKNOWN_ARTIST: &str = "Unknown artist";

/// Deezer error codes, see https://developers.deezer.com/api/errors
const QUOTA_EXCEEDED: u32 = 4;
const INVALID_TOKEN: u32 = 200;
const TOKEN_REQUIRED: u32 = 300;
const NO_DATA: u32 = 800;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchItem>,
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: Option<String>,
    link: Option<String>,
    artist: Option<ArtistItem>,
}

#[derive(Debug, Deserialize)]
struct ArtistItem {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: u32,
}

impl SearchItem {
    /// Items without a link are not playable and are dropped.
    fn into_track(self) -> Option<Track> {
        let url = self.link.filter(|l| !l.is_empty())?;
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string());
        let artist = self
            .artist
            .and_then(|a| a.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
        Some(Track { title, artist, url })
    }
}

/// Search client for the Deezer `/search` endpoint.
#[derive(Clone)]
pub struct DeezerClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    limit: usize,
}

impl DeezerClient {
    /// Builds the HTTP client with the configured request timeout.
    pub fn new(config: MusicApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MusicApiError::Configuration(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url,
            api_token: config.api_token,
            limit: config.limit,
        })
    }

    fn masked_token(&self) -> String {
        mask_token(&self.api_token)
    }
}

#[async_trait]
impl MusicSearch for DeezerClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Tracks> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MusicApiError::InvalidInput("query is empty".to_string()));
        }

        info!(
            base_url = %self.base_url,
            limit = self.limit,
            api_token = %self.masked_token(),
            "Music search request"
        );

        let limit = self.limit.to_string();
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("limit", limit.as_str()),
                ("access_token", self.api_token.as_str()),
            ])
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(MusicApiError::Auth(format!("HTTP {}", status)));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(MusicApiError::RateLimited(format!("HTTP {}", status)));
            }
            s if !s.is_success() => {
                return Err(MusicApiError::UnexpectedResponse(format!("HTTP {}", s)));
            }
            _ => {}
        }

        let body = response
            .text()
            .await
            .map_err(network_error)?;
        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| MusicApiError::UnexpectedResponse(e.to_string()))?;

        if let Some(err) = parsed.error {
            if err.code == NO_DATA {
                debug!(message = %err.message, "Music API returned no data");
                return Ok(Tracks::empty());
            }
            warn!(kind = %err.kind, code = err.code, message = %err.message, "Music API error");
            return Err(classify_api_error(err));
        }

        let tracks: Vec<Track> = parsed
            .data
            .into_iter()
            .filter_map(SearchItem::into_track)
            .take(self.limit)
            .collect();

        info!(count = tracks.len(), "Music search completed");
        Ok(Tracks::from(tracks))
    }
}

/// The request URL carries the API token, so it is stripped from transport errors.
fn network_error(e: reqwest::Error) -> MusicApiError {
    MusicApiError::Network(e.without_url().to_string())
}

fn classify_api_error(err: ApiErrorBody) -> MusicApiError {
    let detail = format!("{} ({}): {}", err.kind, err.code, err.message);
    match err.code {
        QUOTA_EXCEEDED => MusicApiError::RateLimited(detail),
        INVALID_TOKEN | TOKEN_REQUIRED => MusicApiError::Auth(detail),
        _ if err.kind == "OAuthException" => MusicApiError::Auth(detail),
        _ => MusicApiError::UnexpectedResponse(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(kind: &str, code: u32) -> ApiErrorBody {
        ApiErrorBody {
            kind: kind.to_string(),
            message: "msg".to_string(),
            code,
        }
    }

    #[test]
    fn test_classify_api_error() {
        assert!(matches!(
            classify_api_error(api_error("Exception", QUOTA_EXCEEDED)),
            MusicApiError::RateLimited(_)
        ));
        assert!(matches!(
            classify_api_error(api_error("OAuthException", TOKEN_REQUIRED)),
            MusicApiError::Auth(_)
        ));
        assert!(matches!(
            classify_api_error(api_error("OAuthException", 0)),
            MusicApiError::Auth(_)
        ));
        assert!(matches!(
            classify_api_error(api_error("ParameterException", 500)),
            MusicApiError::UnexpectedResponse(_)
        ));
    }

    #[test]
    fn test_item_without_link_is_dropped() {
        let item = SearchItem {
            title: Some("Numb".to_string()),
            link: None,
            artist: None,
        };
        assert!(item.into_track().is_none());
    }

    #[test]
    fn test_item_defaults_for_missing_fields() {
        let item = SearchItem {
            title: None,
            link: Some("https://example/1".to_string()),
            artist: Some(ArtistItem { name: None }),
        };
        let track = item.into_track().unwrap();
        assert_eq!(track.title, UNTITLED);
        assert_eq!(track.artist, UNKNOWN_ARTIST);
    }

    #[test]
    fn test_masked_token() {
        let client = DeezerClient::new(MusicApiConfig::new("abcdefghijkl")).unwrap();
        assert_eq!(client.masked_token(), "abcd***kl");
        let short = DeezerClient::new(MusicApiConfig::new("abc")).unwrap();
        assert_eq!(short.masked_token(), "***");
    }
}
