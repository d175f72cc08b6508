//! Mood playlists from simple, ordered rules.
//!
//! Core modules:
//! - [`song`] - Raw input and its normalized [`Song`] form
//! - [`classifier`] - Hype / Chill / Mixed classification
//! - [`playlist`] - In-memory collection and mood playlists
//! - [`query`] - Search and statistics
//! - [`lucky`] - Random picks and pick history
//! - [`session`] - Collection, profile and history owned together
//!
//! ### Supporting Modules
//!
//! - [`config`] - Profile file and song list loading
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use moodlist::{Mood, MoodProfile, PickMode, Session, Song};
//!
//! let mut session = Session::new(MoodProfile::new(7, 3, "jazz"));
//! session.add_song(Song::from_parts("Take Five", "Dave Brubeck", "Jazz", 5, "classic")?);
//! session.add_song(Song::from_parts("Weightless", "Marconi Union", "ambient", 1, "")?);
//! session.add_song(Song::from_parts("Clocks", "Coldplay", "pop", 5, "")?);
//!
//! assert_eq!(session.by_mood(Mood::Hype).len(), 1);
//! assert_eq!(session.by_mood(Mood::Chill).len(), 1);
//!
//! let stats = session.stats();
//! assert_eq!(stats.total, 3);
//!
//! let pick = session.lucky_pick(PickMode::Chill)?;
//! assert_eq!(pick.title, "Weightless");
//! # Ok::<(), moodlist::PlaylistError>(())
//! ```
//!
//! ## Classification Rules
//!
//! Rules are checked in order and the first match wins:
//!
//! 1. **Hype** - favorite genre, energy at or above `hype_min_energy`, or a
//!    genre containing `rock`, `punk` or `party`
//! 2. **Chill** - energy at or below `chill_max_energy`, or a title containing
//!    `lofi`, `ambient` or `sleep`
//! 3. **Mixed** - anything else
//!
//! ## Error Handling
//!
//! Library operations return [`PlaylistError`] for the two failures the domain
//! has (unreadable energy, picking from an empty pool). File loading in
//! [`config`] returns `anyhow::Result` with context.

pub mod classifier;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod lucky;
pub mod playlist;
pub mod query;
pub mod session;
pub mod song;

pub use classifier::{classify, explain, Classification, Mood, MoodProfile, Rule};
pub use error::PlaylistError;
pub use lucky::{history_summary, pick, PickHistory, PickHistoryEntry, PickMode};
pub use playlist::{build_playlists, PlaylistStore, Playlists};
pub use query::{search, search_by, stats, SearchField, Stats};
pub use session::Session;
pub use song::{normalize, RawEnergy, RawSong, RawTags, Song};
