//! # Command-Line Interface Module
//!
//! Clap definitions for the `moodlist` binary.
//!
//! ## Commands
//!
//! - `classify`: Classify a single song given on the command line
//! - `playlists`: Split a song list into Hype, Chill and Mixed
//! - `search`: Find songs by artist, title or genre
//! - `stats`: Summarize a song list
//! - `lucky`: Draw random songs from a pool and show the pick history
//!
//! ## Examples
//!
//! ```bash
//! moodlist classify --title "Deep Sleep" --genre ambient --energy 2
//! moodlist playlists songs.json --favorite-genre jazz
//! moodlist lucky songs.json --mode hype --count 3
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::classifier::MoodProfile;
use crate::lucky::PickMode;
use crate::query::SearchField;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "moodlist")]
#[command(about = "Moodlist: sort songs into Hype, Chill and Mixed playlists")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Mood profile selection and per-run overrides.
#[derive(ClapArgs, Debug, Default)]
pub struct ProfileArgs {
    /// Profile JSON file (defaults to the platform config directory)
    #[arg(long, global = true, env = "MOODLIST_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Minimum energy for a song to count as Hype
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub hype_min_energy: Option<u8>,

    /// Maximum energy for a song to count as Chill
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub chill_max_energy: Option<u8>,

    /// Favorite genre; songs of this genre are always Hype. Pass "" for none.
    #[arg(long, global = true)]
    pub favorite_genre: Option<String>,
}

impl ProfileArgs {
    /// Apply the command-line overrides on top of `base`.
    #[must_use]
    pub fn apply(&self, base: MoodProfile) -> MoodProfile {
        MoodProfile::new(
            self.hype_min_energy.unwrap_or(base.hype_min_energy),
            self.chill_max_energy.unwrap_or(base.chill_max_energy),
            self.favorite_genre.as_deref().unwrap_or(&base.favorite_genre),
        )
    }
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify one song given as flags
    ///
    /// Energy may be any number; it is clamped into 1-10. Tags are
    /// comma-separated.
    Classify {
        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        artist: String,

        #[arg(long, default_value = "")]
        genre: String,

        /// Energy level, 1 (calm) to 10 (intense)
        #[arg(long, allow_hyphen_values = true)]
        energy: String,

        #[arg(long, default_value = "")]
        tags: String,

        /// Show which rule decided the mood
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the Hype, Chill and Mixed playlists of a song list
    ///
    /// The song list is a JSON array of objects with `title`, `artist`,
    /// `genre`, `energy` and `tags` fields.
    Playlists {
        /// JSON song list
        songs: PathBuf,

        /// Show which rule placed each song
        #[arg(short, long)]
        verbose: bool,
    },

    /// Search a song list (case-insensitive substring match)
    Search {
        /// JSON song list
        songs: PathBuf,

        /// Text to look for; empty matches everything
        #[arg(default_value = "")]
        query: String,

        /// Field to search
        #[arg(long, value_enum, default_value_t = SearchField::Artist)]
        field: SearchField,
    },

    /// Show statistics for a song list
    Stats {
        /// JSON song list
        songs: PathBuf,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw random songs and summarize the pick history
    Lucky {
        /// JSON song list
        songs: PathBuf,

        /// Pool to draw from
        #[arg(long, value_enum, default_value_t = PickMode::Any)]
        mode: PickMode,

        /// Number of picks
        #[arg(long, default_value = "1")]
        count: usize,
    },

    /// Generate shell completions
    ///
    /// Usage: moodlist completion bash > ~/.local/share/bash-completion/completions/moodlist
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_profile_overrides() {
        let args = Args::parse_from([
            "moodlist",
            "--favorite-genre",
            " Jazz",
            "--hype-min-energy",
            "8",
            "stats",
            "songs.json",
        ]);
        let profile = args.profile.apply(MoodProfile::default());
        assert_eq!(profile, MoodProfile::new(8, 3, "jazz"));
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        let args = Args::parse_from(["moodlist", "playlists", "songs.json"]);
        let base = MoodProfile::new(6, 2, "punk");
        assert_eq!(args.profile.apply(base.clone()), base);
    }

    #[test]
    fn test_lucky_defaults() {
        let args = Args::parse_from(["moodlist", "lucky", "songs.json"]);
        match args.command {
            Command::Lucky { mode, count, .. } => {
                assert_eq!(mode, PickMode::Any);
                assert_eq!(count, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_classify_accepts_negative_energy() {
        let args = Args::parse_from(["moodlist", "classify", "--energy", "-4"]);
        assert!(matches!(args.command, Command::Classify { ref energy, .. } if energy == "-4"));
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let result = Args::try_parse_from(["moodlist", "--hype-min-energy", "11", "stats", "x.json"]);
        assert!(result.is_err());
    }
}
