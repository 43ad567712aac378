use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Transport failure while talking to the chat platform.
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
