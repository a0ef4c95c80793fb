//! CLI layer - Command-line host

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_directory_status, format_note_list};
