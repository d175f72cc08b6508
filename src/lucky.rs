//! Lucky picks: one random song from a chosen pool, logged to a history.

use clap::ValueEnum;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use std::collections::HashMap;
use std::fmt;

use crate::classifier::{classify, Mood, MoodProfile};
use crate::error::{PlaylistError, Result};
use crate::playlist::PlaylistStore;
use crate::song::Song;

/// Which songs a lucky pick draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PickMode {
    Hype,
    Chill,
    /// Hype and Chill songs together. Mixed songs are left out.
    #[default]
    Any,
    /// Every song in the collection.
    All,
}

impl fmt::Display for PickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PickMode::Hype => "hype",
            PickMode::Chill => "chill",
            PickMode::Any => "any",
            PickMode::All => "all",
        };
        f.write_str(name)
    }
}

impl PickMode {
    /// The pool this mode draws from, in insertion order.
    #[must_use]
    pub fn pool<'a>(self, store: &'a PlaylistStore, profile: &MoodProfile) -> Vec<&'a Song> {
        match self {
            PickMode::Hype => store.by_mood(Mood::Hype, profile),
            PickMode::Chill => store.by_mood(Mood::Chill, profile),
            PickMode::Any => store
                .all()
                .iter()
                .filter(|song| classify(song, profile) != Mood::Mixed)
                .collect(),
            PickMode::All => store.all().iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickHistoryEntry {
    pub song: Song,
    /// Mood under the profile that was active when the song was picked.
    pub mood: Mood,
    /// Zero-based position in the history.
    pub position: usize,
}

/// Append-only log of every successful pick in a session.
#[derive(Debug, Clone, Default)]
pub struct PickHistory {
    entries: Vec<PickHistoryEntry>,
}

impl PickHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, song: &Song, mood: Mood) -> &PickHistoryEntry {
        let position = self.entries.len();
        self.entries.push(PickHistoryEntry {
            song: song.clone(),
            mood,
            position,
        });
        &self.entries[position]
    }

    #[must_use]
    pub fn entries(&self) -> &[PickHistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> HashMap<Mood, usize> {
        history_summary(&self.entries)
    }
}

/// Pick a song uniformly at random from `pool` and log it to `history`.
///
/// # Errors
///
/// [`PlaylistError::EmptyPool`] if `pool` is empty. Nothing is logged then.
pub fn pick<'a>(
    pool: &[&'a Song],
    profile: &MoodProfile,
    history: &mut PickHistory,
) -> Result<&'a Song> {
    pick_with_rng(pool, profile, history, &mut thread_rng())
}

/// [`pick`] with a caller-supplied random source.
///
/// # Errors
///
/// [`PlaylistError::EmptyPool`] if `pool` is empty.
pub fn pick_with_rng<'a, R: Rng + ?Sized>(
    pool: &[&'a Song],
    profile: &MoodProfile,
    history: &mut PickHistory,
    rng: &mut R,
) -> Result<&'a Song> {
    let song: &'a Song = pool.choose(rng).copied().ok_or(PlaylistError::EmptyPool)?;
    let mood = classify(song, profile);
    let entry = history.record(song, mood);
    log::debug!(
        "Lucky pick #{}: `{}' by `{}' ({}).",
        entry.position,
        song.title,
        song.artist,
        mood
    );
    Ok(song)
}

/// Count history entries per mood. Every mood is present, possibly with 0.
#[must_use]
pub fn history_summary(history: &[PickHistoryEntry]) -> HashMap<Mood, usize> {
    let mut summary: HashMap<Mood, usize> = Mood::ALL.iter().map(|&mood| (mood, 0)).collect();
    for entry in history {
        *summary.entry(entry.mood).or_insert(0) += 1;
    }
    summary
}
