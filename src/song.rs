//! Song input and its canonical form.
//!
//! User input arrives as a [`RawSong`]: every field optional, energy as whatever
//! the user typed, tags either as a list or as one comma-separated string.
//! [`normalize`] turns it into a [`Song`], which is what the rest of the crate
//! works with.

use serde::{Deserialize, Serialize};

use crate::error::{PlaylistError, Result};

pub const MIN_ENERGY: u8 = 1;
pub const MAX_ENERGY: u8 = 10;

/// A normalized song.
///
/// `genre` and every tag are lowercase; `title` and `artist` keep the casing the
/// user typed for display, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub genre: String,
    /// Always within `MIN_ENERGY..=MAX_ENERGY`.
    pub energy: u8,
    pub tags: Vec<String>,
}

/// Song as supplied by a user or a JSON import.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSong {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub energy: Option<RawEnergy>,
    pub tags: Option<RawTags>,
}

/// Anything that might be an energy level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawEnergy {
    Int(i64),
    Float(f64),
    Text(String),
    /// Any other JSON value (`true`, `[]`, `{}`); never a valid energy.
    Other(serde_json::Value),
}

/// Tags, already split or still comma-separated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    List(Vec<String>),
    Text(String),
}

impl From<i64> for RawEnergy {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for RawEnergy {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u8> for RawEnergy {
    fn from(n: u8) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for RawEnergy {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for RawEnergy {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawEnergy {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for RawTags {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for RawTags {
    fn from(tags: Vec<String>) -> Self {
        Self::List(tags)
    }
}

impl From<Vec<&str>> for RawTags {
    fn from(tags: Vec<&str>) -> Self {
        Self::List(tags.into_iter().map(str::to_string).collect())
    }
}

impl Song {
    /// Build a song straight from its parts, going through [`normalize`].
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::InvalidEnergy`] if `energy` is not numeric.
    pub fn from_parts(
        title: &str,
        artist: &str,
        genre: &str,
        energy: impl Into<RawEnergy>,
        tags: impl Into<RawTags>,
    ) -> Result<Self> {
        normalize(RawSong {
            title: Some(title.to_string()),
            artist: Some(artist.to_string()),
            genre: Some(genre.to_string()),
            energy: Some(energy.into()),
            tags: Some(tags.into()),
        })
    }
}

/// Canonicalize raw input into a [`Song`].
///
/// Missing text fields become empty strings and missing tags an empty list.
/// A missing energy is treated like an unreadable one.
///
/// # Errors
///
/// Returns [`PlaylistError::InvalidEnergy`] when the energy cannot be read as a
/// number. Out-of-range numbers are clamped instead.
pub fn normalize(raw: RawSong) -> Result<Song> {
    let energy = match &raw.energy {
        Some(energy) => parse_energy(energy)?,
        None => {
            return Err(PlaylistError::InvalidEnergy {
                input: String::new(),
            })
        }
    };

    let song = Song {
        title: clean(raw.title),
        artist: clean(raw.artist),
        genre: clean(raw.genre).to_lowercase(),
        energy,
        tags: raw.tags.as_ref().map(parse_tags).unwrap_or_default(),
    };

    log::trace!("Normalized `{}' by `{}' (energy {}).", song.title, song.artist, song.energy);
    Ok(song)
}

fn clean(field: Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Read an energy level and clamp it into `MIN_ENERGY..=MAX_ENERGY`.
///
/// Fractional values are rounded to the nearest whole level.
///
/// # Errors
///
/// [`PlaylistError::InvalidEnergy`] for text that is not a number, and for
/// NaN or infinite values.
pub fn parse_energy(raw: &RawEnergy) -> Result<u8> {
    let invalid = || PlaylistError::InvalidEnergy {
        input: match raw {
            RawEnergy::Int(n) => n.to_string(),
            RawEnergy::Float(f) => f.to_string(),
            RawEnergy::Text(s) => s.clone(),
            RawEnergy::Other(value) => value.to_string(),
        },
    };

    match raw {
        RawEnergy::Int(n) => Ok(clamp_int(*n)),
        RawEnergy::Float(f) => clamp_float(*f).ok_or_else(invalid),
        RawEnergy::Text(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                return Ok(clamp_int(n));
            }
            s.parse::<f64>()
                .ok()
                .and_then(clamp_float)
                .ok_or_else(invalid)
        }
        RawEnergy::Other(_) => Err(invalid()),
    }
}

fn clamp_int(n: i64) -> u8 {
    // Bounded by MAX_ENERGY, so the cast cannot truncate.
    n.clamp(i64::from(MIN_ENERGY), i64::from(MAX_ENERGY)) as u8
}

fn clamp_float(f: f64) -> Option<u8> {
    if !f.is_finite() {
        return None;
    }
    Some(f.round().clamp(f64::from(MIN_ENERGY), f64::from(MAX_ENERGY)) as u8)
}

/// Split, trim and lowercase tags, dropping empty ones.
#[must_use]
pub fn parse_tags(raw: &RawTags) -> Vec<String> {
    let pieces: Vec<&str> = match raw {
        RawTags::List(tags) => tags.iter().map(String::as_str).collect(),
        RawTags::Text(text) => text.split(',').collect(),
    };

    pieces
        .into_iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}
