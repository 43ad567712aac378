//! Music API configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{MusicApiError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.deezer.com/search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Credentials and limits for the music search API.
#[derive(Clone)]
pub struct MusicApiConfig {
    pub api_token: String,
    pub base_url: String,
    pub timeout: Duration,
    pub limit: usize,
}

impl MusicApiConfig {
    /// Uses the given token with default base URL, timeout and limit.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Loads from environment: MUSIC_API_TOKEN required; MUSIC_API_BASE_URL, MUSIC_API_TIMEOUT_SECS,
    /// MUSIC_SEARCH_LIMIT optional. Empty values count as unset.
    pub fn from_env() -> Result<Self> {
        let api_token = non_empty_var("MUSIC_API_TOKEN")
            .ok_or_else(|| MusicApiError::Configuration("MUSIC_API_TOKEN not set".to_string()))?;

        let mut config = Self::new(api_token);
        if let Some(base_url) = non_empty_var("MUSIC_API_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = non_empty_var("MUSIC_API_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| {
                MusicApiError::Configuration(format!("Invalid MUSIC_API_TIMEOUT_SECS: {}", raw))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = non_empty_var("MUSIC_SEARCH_LIMIT") {
            config.limit = raw
                .parse()
                .ok()
                .filter(|limit: &usize| *limit > 0)
                .ok_or_else(|| {
                    MusicApiError::Configuration(format!("Invalid MUSIC_SEARCH_LIMIT: {}", raw))
                })?;
        }
        Ok(config)
    }
}

impl fmt::Debug for MusicApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MusicApiConfig")
            .field("api_token", &mask_token(&self.api_token))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Keeps the first 4 and last 2 characters; tokens of 8 characters or fewer are hidden entirely.
pub(crate) fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 8 {
        return "***".to_string();
    }
    let head: String = token.chars().take(4).collect();
    let tail: String = token.chars().skip(len - 2).collect();
    format!("{}***{}", head, tail)
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
