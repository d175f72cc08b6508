//! In-memory song collection and its mood playlists.

use crate::classifier::{classify, Mood, MoodProfile};
use crate::song::Song;

/// Ordered list of songs for one session.
///
/// Insertion order is kept and duplicates are allowed. Mood views are
/// recomputed on every call.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    songs: Vec<Song>,
}

/// Every song of a collection, split by mood.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlists<'a> {
    pub hype: Vec<&'a Song>,
    pub chill: Vec<&'a Song>,
    pub mixed: Vec<&'a Song>,
}

impl<'a> Playlists<'a> {
    #[must_use]
    pub fn get(&self, mood: Mood) -> &[&'a Song] {
        match mood {
            Mood::Hype => &self.hype,
            Mood::Chill => &self.chill,
            Mood::Mixed => &self.mixed,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hype.len() + self.chill.len() + self.mixed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PlaylistStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, song: Song) {
        log::debug!("Adding `{}' by `{}' to the collection.", song.title, song.artist);
        self.songs.push(song);
    }

    #[must_use]
    pub fn all(&self) -> &[Song] {
        &self.songs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Songs that classify as `mood` under `profile`, in insertion order.
    #[must_use]
    pub fn by_mood(&self, mood: Mood, profile: &MoodProfile) -> Vec<&Song> {
        self.songs
            .iter()
            .filter(|song| classify(song, profile) == mood)
            .collect()
    }

    #[must_use]
    pub fn playlists(&self, profile: &MoodProfile) -> Playlists<'_> {
        build_playlists(&self.songs, profile)
    }
}

impl FromIterator<Song> for PlaylistStore {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        Self {
            songs: iter.into_iter().collect(),
        }
    }
}

/// Partition `songs` into the three mood playlists in a single pass.
#[must_use]
pub fn build_playlists<'a>(songs: &'a [Song], profile: &MoodProfile) -> Playlists<'a> {
    let mut playlists = Playlists::default();
    for song in songs {
        match classify(song, profile) {
            Mood::Hype => playlists.hype.push(song),
            Mood::Chill => playlists.chill.push(song),
            Mood::Mixed => playlists.mixed.push(song),
        }
    }
    log::debug!(
        "Built playlists: {} hype, {} chill, {} mixed.",
        playlists.hype.len(),
        playlists.chill.len(),
        playlists.mixed.len()
    );
    playlists
}
