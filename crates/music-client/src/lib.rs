//! # Music search client
//!
//! Defines the [`MusicSearch`] trait and a Deezer implementation. Used by music-handlers;
//! tests substitute their own [`MusicSearch`] impl.

use async_trait::async_trait;

mod config;
mod deezer;
mod error;
mod track;

pub use config::MusicApiConfig;
pub use deezer::DeezerClient;
pub use error::{MusicApiError, Result};
pub use track::{Track, Tracks};

/// Music search interface: one text query in, zero or more tracks out.
#[async_trait]
pub trait MusicSearch: Send + Sync {
    /// Searches tracks matching `query` (trimmed; empty fails with [`MusicApiError::InvalidInput`]).
    async fn search(&self, query: &str) -> Result<Tracks>;
}
