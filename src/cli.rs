//! Command-line interface for binary_words.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Binary Words - dual-interpretation word reading
#[derive(Parser, Debug)]
#[command(name = "binary_words")]
#[command(about = "Read a spectator's word through Left/Right choices", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Preferences file (defaults to $BINARY_WORDS_PREFS, then binary_words.toml)
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    /// Extra word lists to load (TOML file of [[lists]] tables)
    #[arg(long, global = true)]
    pub word_lists: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the word lists and letter sequences
    Lists,

    /// Print both pools for a choice string
    Filter {
        /// Word list id
        #[arg(short, long, default_value = "default")]
        list: String,

        /// Letter sequence id
        #[arg(short, long, default_value = "custom")]
        sequence: String,

        /// Choices, e.g. "LRRL"
        #[arg(short, long, default_value = "")]
        choices: String,
    },

    /// Run an interactive session
    Play {
        /// Directory for session exports
        #[arg(long, default_value = ".")]
        export_dir: PathBuf,
    },

    /// Run an interactive two-spectator round
    Spectators,
}
