//! Session state: the song collection, the active mood profile and the pick
//! history, owned together.
//!
//! All mutation goes through `&mut self`. Sharing a session between threads
//! means wrapping it in a lock so that `add` and `lucky_pick` are serialized.

use std::collections::HashMap;

use crate::classifier::{classify, Mood, MoodProfile};
use crate::error::Result;
use crate::lucky::{self, PickHistory, PickHistoryEntry, PickMode};
use crate::playlist::{PlaylistStore, Playlists};
use crate::query::{self, SearchField, Stats};
use crate::song::{self, RawSong, Song};

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: PlaylistStore,
    profile: MoodProfile,
    history: PickHistory,
}

impl Session {
    #[must_use]
    pub fn new(profile: MoodProfile) -> Self {
        warn_if_inconsistent(&profile);
        Self {
            profile,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn profile(&self) -> &MoodProfile {
        &self.profile
    }

    /// Swap the active profile. Every later query and pick uses it.
    pub fn set_profile(&mut self, profile: MoodProfile) {
        warn_if_inconsistent(&profile);
        self.profile = profile;
    }

    /// Normalize `raw` and add it to the collection. Returns the mood the new
    /// song has under the active profile.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlaylistError::InvalidEnergy`] for unreadable energy; the
    /// collection is left untouched.
    pub fn add(&mut self, raw: RawSong) -> Result<Mood> {
        let song = song::normalize(raw)?;
        let mood = classify(&song, &self.profile);
        self.store.add(song);
        Ok(mood)
    }

    pub fn add_song(&mut self, song: Song) {
        self.store.add(song);
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        self.store.all()
    }

    #[must_use]
    pub fn by_mood(&self, mood: Mood) -> Vec<&Song> {
        self.store.by_mood(mood, &self.profile)
    }

    #[must_use]
    pub fn playlists(&self) -> Playlists<'_> {
        self.store.playlists(&self.profile)
    }

    #[must_use]
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&Song> {
        query::search_by(self.store.all(), query, field)
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        query::stats(self.store.all(), &self.profile)
    }

    /// Pick one song from the pool `mode` selects and log it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PlaylistError::EmptyPool`] when that pool has no songs.
    pub fn lucky_pick(&mut self, mode: PickMode) -> Result<&Song> {
        let pool = mode.pool(&self.store, &self.profile);
        log::debug!("Lucky pick from the {} pool ({} songs).", mode, pool.len());
        lucky::pick(&pool, &self.profile, &mut self.history)
    }

    #[must_use]
    pub fn history(&self) -> &[PickHistoryEntry] {
        self.history.entries()
    }

    #[must_use]
    pub fn history_summary(&self) -> HashMap<Mood, usize> {
        self.history.summary()
    }
}

impl Extend<Song> for Session {
    fn extend<I: IntoIterator<Item = Song>>(&mut self, songs: I) {
        for song in songs {
            self.store.add(song);
        }
    }
}

fn warn_if_inconsistent(profile: &MoodProfile) {
    if !profile.is_consistent() {
        log::warn!(
            "hype_min_energy ({}) is not above chill_max_energy ({}); overlapping songs classify as Hype.",
            profile.hype_min_energy,
            profile.chill_max_energy
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaylistError;
    use crate::song::RawEnergy;

    fn raw(title: &str, artist: &str, genre: &str, energy: RawEnergy) -> RawSong {
        RawSong {
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            genre: Some(genre.to_string()),
            energy: Some(energy),
            tags: None,
        }
    }

    #[test]
    fn test_add_normalizes_and_stores() {
        let mut session = Session::default();
        let mood = session.add(raw(" Anthem ", "Crowd", "POP", "8".into())).unwrap();
        assert_eq!(mood, Mood::Hype);

        let song = session.songs().last().unwrap();
        assert_eq!(song.title, "Anthem");
        assert_eq!(song.genre, "pop");
        assert_eq!(song.energy, 8);
        assert_eq!(session.songs().len(), 1);
    }

    #[test]
    fn test_rejected_song_is_not_added() {
        let mut session = Session::default();
        let err = session.add(raw("Bad", "X", "pop", "loud".into())).unwrap_err();
        assert!(matches!(err, PlaylistError::InvalidEnergy { .. }));
        assert!(session.songs().is_empty());
    }

    #[test]
    fn test_profile_change_reclassifies() {
        let mut session = Session::new(MoodProfile::new(7, 3, ""));
        session.add(raw("Take Five", "Dave Brubeck", "jazz", RawEnergy::Int(5))).unwrap();
        assert_eq!(session.by_mood(Mood::Mixed).len(), 1);

        session.set_profile(MoodProfile::new(7, 3, "jazz"));
        assert_eq!(session.by_mood(Mood::Hype).len(), 1);
        assert!(session.by_mood(Mood::Mixed).is_empty());
    }

    #[test]
    fn test_lucky_pick_logs_history() {
        let mut session = Session::default();
        session.add(raw("Thunderstruck", "AC/DC", "rock", RawEnergy::Int(9))).unwrap();

        assert_eq!(session.lucky_pick(PickMode::Chill), Err(PlaylistError::EmptyPool));
        assert!(session.history().is_empty());

        let picked = session.lucky_pick(PickMode::Hype).unwrap().title.clone();
        assert_eq!(picked, "Thunderstruck");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history_summary()[&Mood::Hype], 1);
    }

    #[test]
    fn test_search_and_stats_cover_whole_collection() {
        let mut session = Session::default();
        session.extend([
            Song::from_parts("a", "John Smith", "rock", 9, "").unwrap(),
            Song::from_parts("b", "smithson", "jazz", 5, "").unwrap(),
            Song::from_parts("c", "Other", "jazz", 1, "").unwrap(),
        ]);

        assert_eq!(session.search("SMITH", SearchField::Artist).len(), 2);

        let stats = session.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.hype_count, 1);
        assert_eq!(stats.most_common_artist.as_deref(), Some("John Smith"));
        assert_eq!(session.playlists().len(), 3);
    }
}
