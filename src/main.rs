//! # Moodlist
//!
//! Sorts a song list into Hype, Chill and Mixed playlists, searches it, shows
//! statistics and makes lucky picks.
//!
//! ## Usage
//!
//! ```bash
//! # Classify a single song
//! moodlist classify --title "Deep Sleep" --genre ambient --energy 2 -v
//!
//! # Playlists with a different favorite genre
//! moodlist playlists songs.json --favorite-genre jazz
//!
//! # Three picks from the Hype pool
//! moodlist lucky songs.json --mode hype --count 3
//! ```

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};

use moodlist::{cli, completion, config, explain, Mood, Session, Song};

fn print_song(song: &Song) {
    println!(
        "  {} - {} [{}] energy {}{}",
        song.artist,
        song.title,
        song.genre,
        song.energy,
        if song.tags.is_empty() {
            String::new()
        } else {
            format!(" #{}", song.tags.join(" #"))
        }
    );
}

fn load_session(args: &cli::ProfileArgs, songs: &std::path::Path) -> Result<Session> {
    let profile = args.apply(config::load_profile(args.profile.as_deref())?);
    debug!("Active profile: {profile:?}");

    let mut session = Session::new(profile);
    session.extend(config::load_songs(songs)?);
    info!("Loaded {} songs from {}", session.songs().len(), songs.display());
    Ok(session)
}

/// Main entry point for the Moodlist application.
///
/// Initializes logging, parses command-line arguments, and routes commands
/// to the library. Logging is controlled via `RUST_LOG`:
/// - `RUST_LOG=debug moodlist stats songs.json`
/// - `RUST_LOG=moodlist::classifier=trace moodlist playlists songs.json`
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    match args.command {
        cli::Command::Classify { title, artist, genre, energy, tags, verbose } => {
            let profile = args.profile.apply(config::load_profile(args.profile.profile.as_deref())?);
            let song = Song::from_parts(&title, &artist, &genre, energy, tags.as_str())
                .context("Song rejected")?;
            let classification = explain(&song, &profile);

            if verbose {
                println!("{} ({})", classification.mood, classification.rule);
            } else {
                println!("{}", classification.mood);
            }
        }
        cli::Command::Playlists { songs, verbose } => {
            let session = load_session(&args.profile, &songs)?;
            let playlists = session.playlists();

            for mood in Mood::ALL {
                let list = playlists.get(mood);
                println!("{mood} ({})", list.len());
                for song in list {
                    print_song(song);
                    if verbose {
                        println!("    {}", explain(song, session.profile()).rule);
                    }
                }
            }
        }
        cli::Command::Search { songs, query, field } => {
            let session = load_session(&args.profile, &songs)?;
            let found = session.search(&query, field);

            if found.is_empty() {
                println!("No songs match `{query}'.");
            }
            for song in found {
                print_song(song);
            }
        }
        cli::Command::Stats { songs, json } => {
            let session = load_session(&args.profile, &songs)?;
            let stats = session.stats();

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Total songs:        {}", stats.total);
                println!(
                    "Hype / Chill / Mixed: {} / {} / {}",
                    stats.hype_count, stats.chill_count, stats.mixed_count
                );
                println!("Hype ratio:         {:.2}", stats.hype_ratio);
                println!("Average energy:     {:.2}", stats.avg_energy);
                println!(
                    "Most common artist: {}",
                    stats.most_common_artist.as_deref().unwrap_or("-")
                );
            }
        }
        cli::Command::Lucky { songs, mode, count } => {
            let mut session = load_session(&args.profile, &songs)?;

            for _ in 0..count {
                let song = session
                    .lucky_pick(mode)
                    .with_context(|| format!("Lucky pick from the {mode} pool failed"))?;
                print_song(song);
            }

            let summary = session.history_summary();
            println!(
                "History: {} hype, {} chill, {} mixed",
                summary[&Mood::Hype],
                summary[&Mood::Chill],
                summary[&Mood::Mixed]
            );
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd);
        }
    }

    Ok(())
}
