//! Search and aggregate statistics over a list of songs.
//!
//! Neither operation fails: an empty list gives an empty search result and
//! zeroed statistics.

use clap::ValueEnum;
use serde::Serialize;
use std::collections::HashMap;

use crate::classifier::{classify, Mood, MoodProfile};
use crate::song::Song;

/// Which song field a search looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchField {
    #[default]
    Artist,
    Title,
    Genre,
}

impl SearchField {
    fn value<'a>(self, song: &'a Song) -> &'a str {
        match self {
            SearchField::Artist => &song.artist,
            SearchField::Title => &song.title,
            SearchField::Genre => &song.genre,
        }
    }
}

/// Case-insensitive substring search on the artist.
#[must_use]
pub fn search<'a, I>(songs: I, artist_query: &str) -> Vec<&'a Song>
where
    I: IntoIterator<Item = &'a Song>,
{
    search_by(songs, artist_query, SearchField::Artist)
}

/// Case-insensitive substring search on any [`SearchField`].
///
/// An empty (or blank) query matches every song. Order is preserved.
#[must_use]
pub fn search_by<'a, I>(songs: I, query: &str, field: SearchField) -> Vec<&'a Song>
where
    I: IntoIterator<Item = &'a Song>,
{
    let needle = query.trim().to_lowercase();
    let found: Vec<&Song> = songs
        .into_iter()
        .filter(|song| field.value(song).to_lowercase().contains(&needle))
        .collect();
    log::debug!("Search {:?} for `{}' matched {} songs.", field, query, found.len());
    found
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub hype_count: usize,
    pub chill_count: usize,
    pub mixed_count: usize,
    /// Share of Hype songs, `0.0` for an empty list.
    pub hype_ratio: f64,
    /// Mean energy, `0.0` for an empty list.
    pub avg_energy: f64,
    /// Most frequent artist; ties go to whoever appears first. `None` when empty.
    pub most_common_artist: Option<String>,
}

/// Summarize `songs` under `profile`.
#[must_use]
pub fn stats<'a, I>(songs: I, profile: &MoodProfile) -> Stats
where
    I: IntoIterator<Item = &'a Song>,
{
    let mut stats = Stats::default();
    let mut energy_sum: u64 = 0;
    // artist -> (count, first position)
    let mut artists: HashMap<&str, (usize, usize)> = HashMap::new();

    for (position, song) in songs.into_iter().enumerate() {
        stats.total += 1;
        energy_sum += u64::from(song.energy);
        match classify(song, profile) {
            Mood::Hype => stats.hype_count += 1,
            Mood::Chill => stats.chill_count += 1,
            Mood::Mixed => stats.mixed_count += 1,
        }
        artists.entry(song.artist.as_str()).or_insert((0, position)).0 += 1;
    }

    if stats.total > 0 {
        let total = stats.total as f64;
        stats.hype_ratio = stats.hype_count as f64 / total;
        stats.avg_energy = energy_sum as f64 / total;
    }

    // Highest count first, then earliest first appearance.
    stats.most_common_artist = artists
        .into_iter()
        .min_by_key(|&(_, (count, first))| (std::cmp::Reverse(count), first))
        .map(|(artist, _)| artist.to_string());

    log::debug!(
        "Stats: {} songs, hype ratio {:.2}, average energy {:.2}.",
        stats.total,
        stats.hype_ratio,
        stats.avg_energy
    );
    stats
}
