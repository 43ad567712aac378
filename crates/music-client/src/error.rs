use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MusicApiError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Music API rejected credentials: {0}")]
    Auth(String),

    #[error("Music API rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Unexpected music API response: {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, MusicApiError>;
