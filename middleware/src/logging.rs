use async_trait::async_trait;
use mbot_core::{HandlerResponse, Message, Middleware, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the final response in after(); always continues.
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(reply) => info!(
                message_id = %message.id,
                reply_len = reply.text.chars().count(),
                buttons = reply.buttons.len(),
                "Processed message"
            ),
            other => debug!(
                message_id = %message.id,
                response = ?other,
                "Processed message without reply"
            ),
        }
        Ok(())
    }
}
