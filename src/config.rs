//! # Configuration Module
//!
//! Loads the mood profile and song lists used by the command-line front end.
//!
//! ## Profile Location
//!
//! Without an explicit `--profile`, the profile is read from the platform
//! configuration directory:
//! - Linux: `~/.config/moodlist/profile.json`
//! - macOS: `~/Library/Application Support/moodlist/profile.json`
//! - Windows: `%APPDATA%\moodlist\profile.json`
//!
//! A missing default file simply means the default profile. Songs are never
//! written back; every run starts from the file it is given.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::classifier::MoodProfile;
use crate::song::{self, RawSong, Song, MAX_ENERGY, MIN_ENERGY};

/// Returns the default profile path. Does not create anything.
///
/// # Errors
///
/// Fails if the platform has no configuration directory.
pub fn get_profile_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system configuration directory. Pass --profile explicitly."
        )
    })?;

    Ok(config_dir.join("moodlist").join("profile.json"))
}

/// Load a mood profile.
///
/// With `path`, that file must exist. Without it, the default location is
/// tried and the built-in profile is used if nothing is there.
///
/// # Errors
///
/// Unreadable or malformed profile files, and thresholds outside the
/// energy range.
pub fn load_profile(path: Option<&Path>) -> Result<MoodProfile> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default_path = get_profile_path()?;
            if !default_path.exists() {
                log::debug!(
                    "No profile at {}, using the default profile.",
                    default_path.display()
                );
                return Ok(MoodProfile::default());
            }
            default_path
        }
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: MoodProfile = serde_json::from_str(&text)
        .with_context(|| format!("Invalid profile JSON in {}", path.display()))?;

    check_thresholds(&profile)
        .with_context(|| format!("Invalid profile {}", path.display()))?;

    log::info!("Loaded mood profile from {}", path.display());
    Ok(profile.normalized())
}

/// Thresholds must lie in `MIN_ENERGY..=MAX_ENERGY`, the same range the
/// command-line overrides accept.
fn check_thresholds(profile: &MoodProfile) -> Result<()> {
    let range = MIN_ENERGY..=MAX_ENERGY;
    for (name, value) in [
        ("hype_min_energy", profile.hype_min_energy),
        ("chill_max_energy", profile.chill_max_energy),
    ] {
        if !range.contains(&value) {
            anyhow::bail!("{name} is {value}, expected {MIN_ENERGY} to {MAX_ENERGY}");
        }
    }
    Ok(())
}

/// Write `profile` as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Filesystem failures.
pub fn save_profile(profile: &MoodProfile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json).with_context(|| format!("Failed to write profile {}", path.display()))?;
    Ok(())
}

/// Read a JSON array of raw songs and normalize each one.
///
/// # Errors
///
/// Unreadable file, malformed JSON, or the first song that fails to
/// normalize (reported with its index).
pub fn load_songs(path: &Path) -> Result<Vec<Song>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read song list {}", path.display()))?;
    parse_songs(&text).with_context(|| format!("Invalid song list {}", path.display()))
}

/// [`load_songs`] on an in-memory JSON string.
///
/// # Errors
///
/// Malformed JSON or a song that fails to normalize.
pub fn parse_songs(json: &str) -> Result<Vec<Song>> {
    let raw: Vec<RawSong> = serde_json::from_str(json).context("Expected a JSON array of songs")?;

    let songs = raw
        .into_iter()
        .enumerate()
        .map(|(index, raw)| song::normalize(raw).with_context(|| format!("Song #{index}")))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Imported {} songs.", songs.len());
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaylistError;
    use tempfile::TempDir;

    #[test]
    fn test_get_profile_path_structure() {
        // Platforms without a config dir are covered by the error path.
        if let Ok(path) = get_profile_path() {
            assert!(path.ends_with("moodlist/profile.json"));
            assert!(path.is_absolute(), "Profile path should be absolute");
        }
    }

    #[test]
    fn test_profile_round_trip_through_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("profile.json");
        let profile = MoodProfile::new(8, 2, "jazz");

        save_profile(&profile, &path)?;
        assert_eq!(load_profile(Some(path.as_path()))?, profile);
        Ok(())
    }

    #[test]
    fn test_partial_profile_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"favorite_genre": "  Metal "}"#)?;

        let profile = load_profile(Some(path.as_path()))?;
        assert_eq!(profile.hype_min_energy, 7);
        assert_eq!(profile.chill_max_energy, 3);
        assert_eq!(profile.favorite_genre, "metal");
        Ok(())
    }

    #[test]
    fn test_missing_explicit_profile_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = load_profile(Some(dir.path().join("absent.json").as_path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_profile_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load_profile(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_out_of_range_thresholds_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");

        for json in [
            r#"{"hype_min_energy": 0, "chill_max_energy": 0}"#,
            r#"{"hype_min_energy": 11}"#,
            r#"{"chill_max_energy": 200}"#,
        ] {
            fs::write(&path, json).unwrap();
            let err = load_profile(Some(path.as_path())).unwrap_err();
            assert!(format!("{err:#}").contains("expected 1 to 10"), "`{json}' got: {err:#}");
        }

        fs::write(&path, r#"{"hype_min_energy": 10, "chill_max_energy": 1}"#).unwrap();
        assert!(load_profile(Some(path.as_path())).is_ok(), "Range ends are valid");
    }

    #[test]
    fn test_parse_songs() -> Result<()> {
        let songs = parse_songs(
            r#"[
                {"title": "Thunderstruck", "artist": "AC/DC", "genre": "Rock", "energy": 9, "tags": ["classic"]},
                {"title": "Weightless", "artist": "Marconi Union", "genre": "ambient", "energy": "1", "tags": "calm, sleep"}
            ]"#,
        )?;

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].genre, "rock");
        assert_eq!(songs[1].energy, 1);
        assert_eq!(songs[1].tags, vec!["calm", "sleep"]);
        Ok(())
    }

    #[test]
    fn test_parse_songs_reports_bad_index() {
        let err = parse_songs(r#"[{"energy": 5}, {"energy": "loud"}]"#).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Song #1"), "got: {message}");
        assert!(message.contains("loud"), "got: {message}");
    }

    #[test]
    fn test_parse_songs_rejects_non_numeric_json_energy() {
        let err = parse_songs(r#"[{"energy": 5}, {"title": "Bad", "energy": true}]"#).unwrap_err();

        assert_eq!(
            err.downcast_ref::<PlaylistError>(),
            Some(&PlaylistError::InvalidEnergy {
                input: "true".to_string()
            })
        );
        let message = format!("{err:#}");
        assert!(message.contains("Song #1"), "got: {message}");
    }

    #[test]
    fn test_load_songs_from_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("songs.json");
        fs::write(&path, r#"[{"title": "x", "energy": 12}]"#)?;

        let songs = load_songs(&path)?;
        assert_eq!(songs[0].energy, 10);
        Ok(())
    }
}
