//! Fixed user-facing texts.

pub const USAGE_HINT: &str =
    "Send me an artist, a song title or a mood and I will look for matching tracks.";

pub const NO_RESULTS: &str = "No results found.";

pub const SEARCH_FAILED: &str = "Search failed, please try again later.";

pub const WELCOME: &str = "Hi! Send me some text and I will try to find matching music.\n\
Examples: linkin park numb, daft punk, calm piano";

pub const HELP: &str = "Just write what you are looking for: an artist, a song title or a mood. \
I reply with a few matching tracks and a button to open each one.";
