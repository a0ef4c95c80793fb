//! Infrastructure layer - External I/O and persistence

pub mod config_store;
pub mod picker;
pub mod repository;

pub use config_store::ConfigStore;
pub use picker::{DirectoryPicker, FixedPicker, TerminalPicker};
pub use repository::{FileSystemRepository, NoteRepository};
