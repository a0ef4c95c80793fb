//! Note file records and the `.snt` naming rules

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Suffix shared by every note file on disk
pub const NOTE_EXTENSION: &str = ".snt";

/// One `.snt` file loaded from the notes directory.
///
/// `html_content` is always empty here; rendering belongs to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteFile {
    pub name: String,
    pub content: String,
    pub html_content: String,
}

impl NoteFile {
    pub fn new(name: String, content: String) -> Self {
        NoteFile {
            name,
            content,
            html_content: String::new(),
        }
    }

    /// Note name for a path, or `None` when the file name lacks the suffix.
    /// The suffix check works on the raw file name, so a non-UTF-8 name
    /// still counts as a note.
    pub fn name_from_path(path: &Path) -> Option<String> {
        let file_name = path.file_name()?.to_string_lossy();
        file_name
            .strip_suffix(NOTE_EXTENSION)
            .map(|name| name.to_string())
    }

    /// On-disk file name for a note name
    pub fn file_name_for(name: &str) -> String {
        format!("{}{}", name, NOTE_EXTENSION)
    }

    /// Names must be non-empty single path components
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains('/')
            && !name.contains('\\')
    }
}
