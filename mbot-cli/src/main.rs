//! mbot: Telegram bot that searches music by text. Configuration comes from the environment (.env supported).

use anyhow::Result;
use mbot_cli::{run_bot, AppConfig};
use mbot_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.telegram.log_file)?;

    run_bot(config).await
}
