//! Process configuration: Telegram and music API settings, loaded once at startup.

use anyhow::Result;
use mbot_telegram::TelegramConfig;
use music_client::MusicApiConfig;

/// Everything the bot needs, built once and passed down; nothing is read from the environment later.
/// `Debug` output masks both tokens.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub music: MusicApiConfig,
}

impl AppConfig {
    /// Loads both sections. Missing BOT_TOKEN or MUSIC_API_TOKEN is an error.
    pub fn from_env() -> Result<Self> {
        let telegram = TelegramConfig::from_env()?;
        let music = MusicApiConfig::from_env()?;
        Ok(Self { telegram, music })
    }
}
