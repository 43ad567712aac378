//! # music-handlers
//!
//! [`CommandHandler`] answers `/start` and `/help`; [`SearchHandler`] turns any other text into a
//! music search and formats the tracks as a reply. Both are pure: they return a reply and never send.

mod command;
mod format;
pub mod messages;
mod search;

pub use command::CommandHandler;
pub use format::{
    format_track_line, format_tracks, utf16_len, BUTTON_LABEL_LIMIT, TELEGRAM_MESSAGE_LIMIT,
};
pub use search::SearchHandler;
