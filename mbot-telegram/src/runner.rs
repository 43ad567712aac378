//! REPL runner: authenticates once, converts each teloxide message to a core Message, runs the
//! handler chain and sends the reply back to the originating chat.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use mbot_core::{Bot as CoreBot, HandlerResponse, Message as CoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::Me;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;

/// Calls `getMe` once; a rejected token or unreachable API is an error.
#[instrument(skip(bot))]
pub async fn authenticate(bot: &teloxide::Bot) -> Result<Me> {
    let me = bot
        .get_me()
        .await
        .context("Telegram authentication failed (getMe)")?;
    info!(
        bot_id = me.user.id.0,
        username = %me.user.username.as_deref().unwrap_or("unknown"),
        "Authenticated with Telegram"
    );
    Ok(me)
}

/// Handles one message end to end: typing indicator, handler chain, reply.
///
/// Chain and send failures are logged and swallowed so they never reach the event loop.
#[instrument(skip(chain, bot, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
pub async fn dispatch(chain: &HandlerChain, bot: &dyn CoreBot, message: &CoreMessage) {
    if let Err(e) = bot.send_typing(&message.chat).await {
        debug!(error = %e, "Failed to send typing action");
    }

    let response = match chain.handle(message).await {
        Ok(response) => response,
        Err(e) => {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
            return;
        }
    };

    match response {
        HandlerResponse::Reply(reply) => match bot.send_reply(&message.chat, &reply).await {
            Ok(()) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Sent reply"
            ),
            Err(e) => error!(
                error = %e,
                user_id = message.user.id,
                chat_id = message.chat.id,
                "Failed to send reply"
            ),
        },
        other => debug!(response = ?other, "No reply to send"),
    }
}

/// Authenticates, then starts the teloxide REPL. Each text message is dispatched on its own task.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    authenticate(&bot).await?;

    let sender: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = handler_chain;

    info!("Bot started, waiting for messages");

    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();
            let sender = sender.clone();

            async move {
                let Some(core_msg) = TelegramMessageWrapper(&msg).to_core_text() else {
                    debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
                    return respond(());
                };

                tokio::spawn(async move {
                    dispatch(&chain, sender.as_ref(), &core_msg).await;
                });

                respond(())
            }
        },
    )
    .await;

    Ok(())
}
