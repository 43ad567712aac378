//! Adapters from Telegram (teloxide) types to mbot_core types.

use mbot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat),
            },
            content: self.0.text().unwrap_or("").to_string(),
            created_at: self.0.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Converts only text messages; photos, stickers, service messages and the like yield `None`.
    pub fn to_core_text(&self) -> Option<Message> {
        self.0.text()?;
        Some(self.to_core())
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
    }

    /// **Test: A private text message keeps sender, chat id and text.**
    #[test]
    fn test_telegram_message_wrapper_to_core() {
        let msg: teloxide::types::Message = serde_json::from_value(serde_json::json!({
            "message_id": 10,
            "date": 1706529600,
            "chat": {"id": 555, "type": "private", "first_name": "Test"},
            "from": {"id": 555, "is_bot": false, "first_name": "Test", "username": "tester"},
            "text": "daft punk"
        }))
        .unwrap();

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, "10");
        assert_eq!(core.user.id, 555);
        assert_eq!(core.user.username.as_deref(), Some("tester"));
        assert_eq!(core.chat.id, 555);
        assert_eq!(core.chat.chat_type, "private");
        assert_eq!(core.content, "daft punk");
        assert_eq!(core.created_at.timestamp(), 1706529600);
    }

    /// **Test: Text messages convert, non-text messages are skipped.**
    #[test]
    fn test_to_core_text_skips_non_text() {
        let text: teloxide::types::Message = serde_json::from_value(serde_json::json!({
            "message_id": 11,
            "date": 1706529600,
            "chat": {"id": 555, "type": "private", "first_name": "Test"},
            "from": {"id": 555, "is_bot": false, "first_name": "Test"},
            "text": "numb"
        }))
        .unwrap();
        let location: teloxide::types::Message = serde_json::from_value(serde_json::json!({
            "message_id": 12,
            "date": 1706529600,
            "chat": {"id": 555, "type": "private", "first_name": "Test"},
            "from": {"id": 555, "is_bot": false, "first_name": "Test"},
            "location": {"latitude": 52.5, "longitude": 13.4}
        }))
        .unwrap();

        let core = TelegramMessageWrapper(&text).to_core_text().unwrap();
        assert_eq!(core.content, "numb");
        assert!(TelegramMessageWrapper(&location).to_core_text().is_none());
    }
}
