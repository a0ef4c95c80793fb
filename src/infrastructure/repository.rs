//! File system repository for `.snt` notes

use crate::domain::{Config, NoteFile};
use crate::error::{Result, SeekerError};
use crate::infrastructure::ConfigStore;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Abstract repository for note operations
pub trait NoteRepository {
    /// Load every `.snt` file directly inside the config's directory.
    /// Entries that fail to load are skipped.
    fn load_all_from_dir(&self, config: &Config) -> Result<Vec<NoteFile>>;

    /// Load a single `.snt` file by path
    fn load_one(&self, path: &Path) -> Result<NoteFile>;

    /// Write `content` to `<dir>/<name>.snt`, replacing any existing file
    fn save_one(&self, config: &Config, content: &str, name: &str) -> Result<()>;
}

/// File system implementation of NoteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    store: ConfigStore,
}

impl FileSystemRepository {
    /// Create a repository that keeps the given config store's directory in place
    pub fn new(store: ConfigStore) -> Self {
        FileSystemRepository { store }
    }
}

impl NoteRepository for FileSystemRepository {
    fn load_all_from_dir(&self, config: &Config) -> Result<Vec<NoteFile>> {
        self.store.ensure_config_path_exists()?;

        if !config.is_user_dir_valid() {
            return Err(SeekerError::InvalidDirectory(
                config.user_selected_directory.clone(),
            ));
        }

        let walker = WalkDir::new(config.user_dir()).min_depth(1).max_depth(1);
        let mut notes = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                // The directory itself could not be listed
                Err(e) if e.depth() == 0 => return Err(io::Error::from(e).into()),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            match self.load_one(entry.path()) {
                Ok(note) => notes.push(note),
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                }
            }
        }

        notes.sort_by(|a, b| a.name.cmp(&b.name));

        debug!(
            "Loaded {} notes from {}",
            notes.len(),
            config.user_selected_directory
        );
        Ok(notes)
    }

    fn load_one(&self, path: &Path) -> Result<NoteFile> {
        let name = NoteFile::name_from_path(path)
            .ok_or_else(|| SeekerError::InvalidExtension(path.to_path_buf()))?;

        let content = fs::read_to_string(path)?;

        Ok(NoteFile::new(name, content))
    }

    fn save_one(&self, config: &Config, content: &str, name: &str) -> Result<()> {
        self.store.ensure_config_path_exists()?;

        // An empty directory would resolve against the working directory
        if config.user_selected_directory.is_empty() {
            return Err(SeekerError::InvalidDirectory(String::new()));
        }
        if !NoteFile::is_valid_name(name) {
            return Err(SeekerError::InvalidNoteName(name.to_string()));
        }

        let path = config.user_dir().join(NoteFile::file_name_for(name));
        fs::write(&path, content)?;

        info!("Saved note {}", path.display());
        Ok(())
    }
}
