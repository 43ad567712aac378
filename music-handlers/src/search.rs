//! Search handler: message text → music search → formatted reply.

use std::sync::Arc;

use async_trait::async_trait;
use mbot_core::{Handler, HandlerResponse, Message, Reply, Result};
use music_client::{MusicApiError, MusicSearch, Track};
use tracing::{error, info, instrument};

use crate::format::{format_tracks, TELEGRAM_MESSAGE_LIMIT};
use crate::messages::{NO_RESULTS, SEARCH_FAILED, USAGE_HINT};

/// Replies to every message with search results. Search failures become a generic failure reply.
pub struct SearchHandler {
    search: Arc<dyn MusicSearch>,
}

impl SearchHandler {
    pub fn new(search: Arc<dyn MusicSearch>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Handler for SearchHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let query = message.content.trim();
        if query.is_empty() {
            return Ok(HandlerResponse::Reply(Reply::text(USAGE_HINT)));
        }

        let reply = match self.search.search(query).await {
            Ok(tracks) => {
                let tracks: Vec<Track> = tracks.collect();
                info!(
                    user_id = message.user.id,
                    query = %query,
                    count = tracks.len(),
                    "Search finished"
                );
                if tracks.is_empty() {
                    Reply::text(NO_RESULTS)
                } else {
                    format_tracks(&tracks, TELEGRAM_MESSAGE_LIMIT)
                }
            }
            Err(MusicApiError::InvalidInput(_)) => Reply::text(USAGE_HINT),
            Err(e) => {
                error!(user_id = message.user.id, query = %query, error = %e, "Search failed");
                Reply::text(SEARCH_FAILED)
            }
        };

        Ok(HandlerResponse::Reply(reply))
    }
}
