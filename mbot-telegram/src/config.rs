//! Minimal Telegram config: token, optional API URL, log path.
//! Loaded from BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL) and LOG_FILE.

use anyhow::{Context, Result};
use std::env;
use std::fmt;

pub const DEFAULT_LOG_FILE: &str = "logs/mbot.log";

/// Telegram connection and logging settings.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl TelegramConfig {
    /// BOT_TOKEN is required; TELEGRAM_API_URL and LOG_FILE are optional. Empty values count as unset.
    pub fn from_env() -> Result<Self> {
        let bot_token = non_empty_var("BOT_TOKEN").context("BOT_TOKEN not set")?;
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));
        let log_file = non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds with the given token; other fields take their defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Creates the teloxide Bot, pointing it at `telegram_api_url` when set. Does not touch the network.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(raw) => {
                let url = reqwest::Url::parse(raw)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", raw))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"***")
            .field("telegram_api_url", &self.telegram_api_url)
            .field("log_file", &self.log_file)
            .finish()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
