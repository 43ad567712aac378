//! # mbot-cli
//!
//! Wires the music search bot together: config, handler chain, Deezer client, Telegram REPL.

pub mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use middleware::LoggingMiddleware;
use music_client::{DeezerClient, MusicSearch};
use music_handlers::{CommandHandler, SearchHandler};
use tracing::{info, instrument};

pub use config::AppConfig;

/// Logging middleware, then commands, then search.
pub fn build_handler_chain(search: Arc<dyn MusicSearch>) -> HandlerChain {
    HandlerChain::new()
        .add_middleware(Arc::new(LoggingMiddleware))
        .add_handler(Arc::new(CommandHandler))
        .add_handler(Arc::new(SearchHandler::new(search)))
}

/// Builds the clients from `config`, authenticates with Telegram and runs until the REPL stops.
#[instrument(skip(config))]
pub async fn run_bot(config: AppConfig) -> Result<()> {
    let search: Arc<dyn MusicSearch> =
        Arc::new(DeezerClient::new(config.music.clone()).context("Build music API client")?);
    let chain = build_handler_chain(search);
    let bot = config.telegram.build_bot()?;

    info!(
        music_api = %config.music.base_url,
        search_limit = config.music.limit,
        timeout_secs = config.music.timeout.as_secs(),
        "Initializing bot"
    );

    mbot_telegram::run_repl(bot, chain).await
}
