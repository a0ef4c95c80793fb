//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seekernotes")]
#[command(about = "Terminal host for the SeekerNotes backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this directory instead of the platform user-config directory
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the config file location and contents
    Config,

    /// Set the notes directory
    SetDir {
        /// Notes directory
        dir: PathBuf,
    },

    /// Prompt for the notes directory (empty input cancels)
    PickDir,

    /// List notes in the notes directory
    List,

    /// Print the raw content of a note file
    Show {
        /// Path to a .snt file
        path: PathBuf,
    },

    /// Save a note into the notes directory
    Save {
        /// Note name (".snt" is appended)
        name: String,

        /// Read content from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
