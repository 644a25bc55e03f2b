use crate::Error;

/// Sample video used when no playlist is given.
pub const SAMPLE_VIDEO: &str =
    "https://www.youtube.com/watch?v=_-2ZUciZgls&ab_channel=Orbital-NoCopyrightGameplay";

/// The original demo list: one YouTube link and the three Vimeo address forms.
pub const SAMPLE_VIDEOS: [&str; 4] = [
    SAMPLE_VIDEO,
    "https://vimeo.com/822195781",
    "https://vimeo.com/894215300",
    "https://player.vimeo.com/video/822195781?h=1c1797085e",
];

/// An ordered, non-empty list of video URLs with a cursor that wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<String>,
    index: usize,
}

impl Playlist {
    /// Creates a playlist positioned at its first entry.
    pub fn new<I, S>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(Error::EmptyPlaylist);
        }
        Ok(Playlist { entries, index: 0 })
    }

    /// The URL under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Index of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `false`; a playlist always has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Moves to the next entry, wrapping to the first after the last, and returns it.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.entries.len();
        self.current()
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Playlist {
            entries: vec![SAMPLE_VIDEO.to_owned()],
            index: 0,
        }
    }
}
