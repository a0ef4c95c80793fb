//! Error types for seekernotes

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the seekernotes backend
#[derive(Debug, Error)]
pub enum SeekerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("File must have a .snt extension: {}", .0.display())]
    InvalidExtension(PathBuf),

    #[error("Invalid user directory: '{0}'")]
    InvalidDirectory(String),

    #[error("Invalid note name: '{0}'")]
    InvalidNoteName(String),

    #[error("Config unavailable: {0}")]
    ConfigUnavailable(String),
}

impl SeekerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SeekerError::InvalidDirectory(_) => 2,
            SeekerError::InvalidExtension(_) => 3,
            SeekerError::ConfigUnavailable(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SeekerError::InvalidDirectory(dir) => {
                let shown = if dir.is_empty() { "<not set>" } else { dir };
                format!(
                    "Invalid user directory: {}\n\n\
                    Suggestions:\n\
                    • Choose a notes folder: seekernotes pick-dir\n\
                    • Or set one directly: seekernotes set-dir <DIR>\n\
                    • The folder must exist and cannot be the filesystem root",
                    shown
                )
            }
            SeekerError::InvalidExtension(path) => {
                format!(
                    "Not a note file: {}\n\n\
                    Note files use the .snt extension (e.g., groceries.snt)",
                    path.display()
                )
            }
            SeekerError::InvalidNoteName(name) => {
                format!(
                    "Invalid note name: '{}'\n\n\
                    Note names must be non-empty and cannot contain path separators",
                    name
                )
            }
            SeekerError::Parse(e) => {
                format!(
                    "Config file is not valid JSON: {}\n\n\
                    Suggestions:\n\
                    • Fix the file by hand (see: seekernotes config)\n\
                    • Or choose the notes folder again: seekernotes pick-dir",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SeekerError
pub type Result<T> = std::result::Result<T, SeekerError>;
