//! Track result and the one-shot sequence returned by a search.

/// One matched song: title, artist and a playable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub url: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            url: url.into(),
        }
    }
}

/// Finite sequence of tracks in provider order. Consumed by iteration; cannot be restarted.
#[derive(Debug)]
pub struct Tracks {
    inner: std::vec::IntoIter<Track>,
}

impl Tracks {
    pub fn empty() -> Self {
        Self::from(Vec::new())
    }
}

impl From<Vec<Track>> for Tracks {
    fn from(tracks: Vec<Track>) -> Self {
        Self {
            inner: tracks.into_iter(),
        }
    }
}

impl Iterator for Tracks {
    type Item = Track;

    fn next(&mut self) -> Option<Track> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Tracks {}
