//! CLI module - Command-line interface for `MovieTracker`
//!
//! Each subcommand is one user action over the JSON store.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::limits;
use crate::models::Category;

/// `MovieTracker` - personal archive of movies, series and cartoons
#[derive(Parser)]
#[command(name = "movietracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default search paths
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// TMDB API key for this run (overrides env and config)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show tracked titles, highest rated first
    #[command(alias = "ls", alias = "l")]
    List {
        /// Only show one category
        #[arg(long, short)]
        category: Option<Category>,
    },

    /// Add a title, or update it if it is already tracked
    #[command(alias = "a")]
    Add {
        /// Title to add
        #[arg(required = true)]
        title: Vec<String>,
        /// movie, series or cartoon
        #[arg(long, short, default_value = "movie")]
        category: Category,
        /// Rating from 1 to 10
        #[arg(long, short, default_value_t = 5, value_parser = clap::value_parser!(u8).range(i64::from(limits::MIN_RATING)..=i64::from(limits::MAX_RATING)))]
        rating: u8,
        /// Free-form comment
        #[arg(long, default_value = "")]
        comment: String,
        /// Number of parts or seasons
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(i64::from(limits::DEFAULT_PARTS)..))]
        parts: u32,
        /// Look the title up as a tv series regardless of category
        #[arg(long)]
        series: bool,
    },

    /// Change rating, comment or parts of a tracked title
    #[command(alias = "u")]
    Update {
        /// Title to update
        #[arg(required = true)]
        title: Vec<String>,
        /// movie, series or cartoon
        #[arg(long, short, default_value = "movie")]
        category: Category,
        /// New rating from 1 to 10
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(i64::from(limits::MIN_RATING)..=i64::from(limits::MAX_RATING)))]
        rating: Option<u8>,
        /// New comment
        #[arg(long)]
        comment: Option<String>,
        /// New number of parts or seasons
        #[arg(long, short, value_parser = clap::value_parser!(u32).range(i64::from(limits::DEFAULT_PARTS)..))]
        parts: Option<u32>,
    },

    /// Delete a title from every category
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// Title to delete
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Show totals, average rating and top genre
    Stats,

    /// Show recommendations
    #[command(alias = "rec")]
    Recommend,

    /// Find titles by name or genre
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Create default config file
    Init,
}

pub use commands::*;

/// Joins positional words into one title or query, trimmed the same way for
/// every command.
#[must_use]
pub fn join_words(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_join_words_trims() {
        let words = vec![" Dark".to_string()];
        assert_eq!(join_words(&words), "Dark");

        let words = vec!["Breaking".to_string(), "Bad ".to_string()];
        assert_eq!(join_words(&words), "Breaking Bad");
    }

    #[test]
    fn test_rating_outside_limits_is_rejected() {
        assert!(Cli::try_parse_from(["movietracker", "add", "Alien", "-r", "11"]).is_err());
        assert!(Cli::try_parse_from(["movietracker", "add", "Alien", "-r", "0"]).is_err());
        assert!(Cli::try_parse_from(["movietracker", "update", "Alien", "-r", "11"]).is_err());
        assert!(Cli::try_parse_from(["movietracker", "add", "Alien", "-p", "0"]).is_err());

        let cli = Cli::try_parse_from(["movietracker", "add", "Alien", "-r", "10"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add { rating: 10, .. })));
    }

    #[test]
    fn test_remove_title_is_trimmed() {
        let cli = Cli::try_parse_from(["movietracker", "rm", " Dark "]).unwrap();
        let Some(Commands::Remove { title }) = cli.command else {
            panic!("expected remove");
        };
        assert_eq!(join_words(&title), "Dark");
    }
}
