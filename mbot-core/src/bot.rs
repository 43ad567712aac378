//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; mbot-telegram implements it via teloxide and tests substitute
//! an in-memory recorder.

use crate::error::Result;
use crate::types::{Chat, Reply};
use async_trait::async_trait;

/// Abstraction for sending replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply (text plus link buttons) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;

    /// Shows a "typing" indicator in the chat. Best-effort; callers may ignore the error.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
