//! Reply formatting: one line per track, link buttons, and the Telegram length limit.

use mbot_core::{LinkButton, Reply};
use music_client::Track;

/// Telegram rejects text messages longer than this many UTF-16 code units.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Inline button labels are cut to this many characters.
pub const BUTTON_LABEL_LIMIT: usize = 60;

/// `"{title} — {artist}: {url}"`
pub fn format_track_line(track: &Track) -> String {
    format!("{} — {}: {}", track.title, track.artist, track.url)
}

fn button_for(track: &Track) -> LinkButton {
    let label: String = format!("{} - {}", track.artist, track.title)
        .chars()
        .take(BUTTON_LABEL_LIMIT)
        .collect();
    LinkButton {
        label,
        url: track.url.clone(),
    }
}

/// Length of `text` as Telegram counts it.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Longest prefix of `text` that fits in `max_units` UTF-16 code units, cut at a char boundary.
fn truncate_utf16(text: &str, max_units: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        used += ch.len_utf16();
        if used > max_units {
            return &text[..idx];
        }
    }
    text
}

/// Builds the reply for a non-empty track list, keeping at most `max_units` UTF-16 code units of text.
///
/// Whole lines are dropped from the end until the text fits; if even the first line is too long
/// it is cut at a character boundary. Only tracks whose line survives get a button.
pub fn format_tracks(tracks: &[Track], max_units: usize) -> Reply {
    let mut text = String::new();
    let mut used = 0;
    let mut buttons = Vec::new();

    for track in tracks {
        let line = format_track_line(track);
        let line_len = utf16_len(&line);
        let sep = usize::from(!text.is_empty());

        if used + sep + line_len > max_units {
            if text.is_empty() {
                text = truncate_utf16(&line, max_units).to_string();
                buttons.push(button_for(track));
            }
            break;
        }

        if sep == 1 {
            text.push('\n');
        }
        text.push_str(&line);
        used += sep + line_len;
        buttons.push(button_for(track));
    }

    Reply::text(text).with_buttons(buttons)
}
