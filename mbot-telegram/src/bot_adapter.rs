//! Wraps teloxide::Bot and implements [`mbot_core::Bot`]. Production code sends replies via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use mbot_core::{Bot as CoreBot, BotError, Chat, LinkButton, Reply, Result};
use teloxide::{
    payloads::SendMessageSetters,
    prelude::*,
    types::{ChatAction, ChatId, InlineKeyboardButton, InlineKeyboardMarkup},
};
use tracing::warn;

/// Thin wrapper around teloxide::Bot that implements mbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// One URL button per row. Buttons whose URL does not parse are skipped.
fn link_keyboard(buttons: &[LinkButton]) -> Option<InlineKeyboardMarkup> {
    let rows: Vec<Vec<InlineKeyboardButton>> = buttons
        .iter()
        .filter_map(|b| match reqwest::Url::parse(&b.url) {
            Ok(url) => Some(vec![InlineKeyboardButton::url(b.label.clone(), url)]),
            Err(e) => {
                warn!(url = %b.url, error = %e, "Skipping button with invalid URL");
                None
            }
        })
        .collect();

    if rows.is_empty() {
        None
    } else {
        Some(InlineKeyboardMarkup::new(rows))
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if let Some(keyboard) = link_keyboard(&reply.buttons) {
            request = request.reply_markup(keyboard);
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
