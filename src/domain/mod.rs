//! Domain layer - Config and note records

pub mod config;
pub mod note;

pub use config::Config;
pub use note::{NoteFile, NOTE_EXTENSION};
