//! Output formatting utilities

use crate::domain::{Config, NoteFile};

const PREVIEW_LEN: usize = 40;

/// Format a list of notes for display
pub fn format_note_list(notes: &[NoteFile]) -> String {
    if notes.is_empty() {
        return "No notes found\n".to_string();
    }

    let width = notes.iter().map(|n| n.name.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            note.name,
            preview(&note.content),
            width = width
        ));
    }
    output
}

/// First line of a note, shortened
fn preview(content: &str) -> String {
    let first = content.lines().next().unwrap_or("").trim();
    if first.chars().count() > PREVIEW_LEN {
        let cut: String = first.chars().take(PREVIEW_LEN).collect();
        format!("{}...", cut)
    } else {
        first.to_string()
    }
}

/// Describe the notes directory of a config
pub fn format_directory_status(config: &Config) -> String {
    if config.user_selected_directory.is_empty() {
        "Notes directory: <not set>".to_string()
    } else if config.is_user_dir_valid() {
        format!("Notes directory: {}", config.user_selected_directory)
    } else {
        format!(
            "Notes directory: {} (invalid: missing, not a directory, or filesystem root)",
            config.user_selected_directory
        )
    }
}
