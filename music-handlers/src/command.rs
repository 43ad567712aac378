//! `/start`, `/help` and unknown-command replies.

use async_trait::async_trait;
use mbot_core::{Handler, HandlerResponse, Message, Reply, Result};
use tracing::{debug, instrument};

use crate::messages::{HELP, USAGE_HINT, WELCOME};

/// Answers bot commands. Non-command text passes through to the next handler.
pub struct CommandHandler;

/// Returns the command name without the leading `/` and any `@botname` suffix.
fn parse_command(text: &str) -> Option<&str> {
    let first = text.trim_start().split_whitespace().next()?;
    let name = first.strip_prefix('/')?;
    name.split('@').next()
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        debug!(command = %command, user_id = message.user.id, "Bot command");

        let text = match command {
            "start" => WELCOME,
            "help" => HELP,
            _ => USAGE_HINT,
        };
        Ok(HandlerResponse::Reply(Reply::text(text)))
    }
}
