//! Domain errors surfaced by the normalizer and the lucky picker.
//!
//! Everything else in the library degrades to empty or zero results instead of
//! failing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaylistError {
    /// Raw energy could not be read as a number at all.
    #[error("invalid energy `{input}': expected a number between 1 and 10")]
    InvalidEnergy { input: String },

    /// A lucky pick was requested from a pool without songs.
    #[error("no songs to pick from")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
