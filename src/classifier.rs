//! Rule-based mood classification.
//!
//! A song gets exactly one [`Mood`]. The rules are checked in a fixed order and
//! the first one that matches decides:
//!
//! 1. **Hype**: genre equals the (non-empty) favorite genre, energy is at least
//!    `hype_min_energy`, or the genre contains `rock`, `punk` or `party`.
//! 2. **Chill**: energy is at most `chill_max_energy`, or the lowercased title
//!    contains `lofi`, `ambient` or `sleep`.
//! 3. **Mixed**: everything else.
//!
//! Hype and Chill conditions overlap, so the order is the contract: a song that
//! satisfies both is Hype. This also settles misconfigured profiles where
//! `hype_min_energy <= chill_max_energy`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::song::Song;

/// Genre substrings that always make a song Hype.
pub const HYPE_GENRE_KEYWORDS: [&str; 3] = ["rock", "punk", "party"];

/// Title substrings that make a song Chill.
pub const CHILL_TITLE_KEYWORDS: [&str; 3] = ["lofi", "ambient", "sleep"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    Hype,
    Chill,
    Mixed,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Hype, Mood::Chill, Mood::Mixed];
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mood::Hype => "Hype",
            Mood::Chill => "Chill",
            Mood::Mixed => "Mixed",
        };
        f.write_str(name)
    }
}

/// User preferences that drive classification.
///
/// Passed in on every call; nothing caches a classification result, so a
/// changed profile takes effect on the next query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodProfile {
    pub hype_min_energy: u8,
    pub chill_max_energy: u8,
    /// Lowercase. Empty means no favorite.
    pub favorite_genre: String,
}

impl Default for MoodProfile {
    fn default() -> Self {
        Self {
            hype_min_energy: 7,
            chill_max_energy: 3,
            favorite_genre: "rock".to_string(),
        }
    }
}

impl MoodProfile {
    #[must_use]
    pub fn new(hype_min_energy: u8, chill_max_energy: u8, favorite_genre: &str) -> Self {
        Self {
            hype_min_energy,
            chill_max_energy,
            favorite_genre: favorite_genre.trim().to_lowercase(),
        }
    }

    /// Same thresholds, favorite genre trimmed and lowercased.
    ///
    /// Profiles read from disk go through this before use.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::new(self.hype_min_energy, self.chill_max_energy, &self.favorite_genre)
    }

    /// Whether the Hype and Chill energy bands are disjoint.
    ///
    /// Overlapping bands still classify deterministically (Hype wins), they
    /// just make the Chill energy rule partly unreachable.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.hype_min_energy > self.chill_max_energy
    }
}

/// The rule that decided a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    FavoriteGenre,
    HighEnergy,
    HypeGenreKeyword,
    LowEnergy,
    ChillTitleKeyword,
    Fallback,
}

impl Rule {
    #[must_use]
    pub fn mood(self) -> Mood {
        match self {
            Rule::FavoriteGenre | Rule::HighEnergy | Rule::HypeGenreKeyword => Mood::Hype,
            Rule::LowEnergy | Rule::ChillTitleKeyword => Mood::Chill,
            Rule::Fallback => Mood::Mixed,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rule::FavoriteGenre => "genre is the favorite genre",
            Rule::HighEnergy => "energy reaches the hype threshold",
            Rule::HypeGenreKeyword => "genre contains a hype keyword",
            Rule::LowEnergy => "energy is within the chill threshold",
            Rule::ChillTitleKeyword => "title contains a chill keyword",
            Rule::Fallback => "no hype or chill rule matched",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub mood: Mood,
    pub rule: Rule,
}

/// Classify a song under `profile`.
#[must_use]
pub fn classify(song: &Song, profile: &MoodProfile) -> Mood {
    explain(song, profile).mood
}

/// Classify a song and report which rule decided it.
#[must_use]
pub fn explain(song: &Song, profile: &MoodProfile) -> Classification {
    let rule = first_matching_rule(song, profile);
    log::trace!("`{}' classified {} ({}).", song.title, rule.mood(), rule);
    Classification {
        mood: rule.mood(),
        rule,
    }
}

fn first_matching_rule(song: &Song, profile: &MoodProfile) -> Rule {
    if !profile.favorite_genre.is_empty() && song.genre == profile.favorite_genre {
        return Rule::FavoriteGenre;
    }
    if song.energy >= profile.hype_min_energy {
        return Rule::HighEnergy;
    }
    if HYPE_GENRE_KEYWORDS.iter().any(|kw| song.genre.contains(kw)) {
        return Rule::HypeGenreKeyword;
    }

    if song.energy <= profile.chill_max_energy {
        return Rule::LowEnergy;
    }
    let title = song.title.to_lowercase();
    if CHILL_TITLE_KEYWORDS.iter().any(|kw| title.contains(kw)) {
        return Rule::ChillTitleKeyword;
    }

    Rule::Fallback
}
