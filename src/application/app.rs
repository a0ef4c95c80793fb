//! Host-facing facade over the config store and note repository

use crate::domain::{Config, NoteFile};
use crate::error::{Result, SeekerError};
use crate::infrastructure::{ConfigStore, DirectoryPicker, NoteRepository};
use log::{debug, warn};
use std::path::Path;

const PICKER_TITLE: &str = "Select a folder";

/// Cached config as seen by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigState {
    Loaded(Config),
    /// Startup load failed; the reason is kept for the host to show
    Unloaded { reason: String },
}

/// Entry point for the host shell.
///
/// Owns the only cached config. Note operations always go to disk.
pub struct App<R, P> {
    store: ConfigStore,
    repository: R,
    picker: P,
    state: ConfigState,
}

impl<R: NoteRepository, P: DirectoryPicker> App<R, P> {
    /// Load the config once. A failure does not abort startup; it leaves
    /// the app in [`ConfigState::Unloaded`].
    pub fn startup(store: ConfigStore, repository: R, picker: P) -> Self {
        let state = match store.get_config() {
            Ok(config) => ConfigState::Loaded(config),
            Err(e) => {
                warn!("Failed to load config at startup: {}", e);
                ConfigState::Unloaded {
                    reason: e.to_string(),
                }
            }
        };

        App {
            store,
            repository,
            picker,
            state,
        }
    }

    /// Build an app around an already known config
    pub fn with_config(store: ConfigStore, repository: R, picker: P, config: Config) -> Self {
        App {
            store,
            repository,
            picker,
            state: ConfigState::Loaded(config),
        }
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    /// Cached config, `None` while unloaded
    pub fn config(&self) -> Option<&Config> {
        match &self.state {
            ConfigState::Loaded(config) => Some(config),
            ConfigState::Unloaded { .. } => None,
        }
    }

    /// Cached config, or `ConfigUnavailable` carrying the startup failure
    pub fn require_config(&self) -> Result<&Config> {
        match &self.state {
            ConfigState::Loaded(config) => Ok(config),
            ConfigState::Unloaded { reason } => Err(SeekerError::ConfigUnavailable(reason.clone())),
        }
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.store
    }

    /// Persist the config and, once written, make it the cached copy
    pub fn save_config(&mut self, config: &Config) -> Result<()> {
        self.store.save_config(config)?;
        self.state = ConfigState::Loaded(config.clone());
        Ok(())
    }

    /// Re-read the config from disk into the cache
    pub fn reload_config(&mut self) -> Result<&Config> {
        match self.store.get_config() {
            Ok(config) => {
                self.state = ConfigState::Loaded(config);
                self.require_config()
            }
            Err(e) => {
                self.state = ConfigState::Unloaded {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Ask the picker for a folder. `None` when the user cancelled.
    pub fn open_folder_dialog(&mut self) -> Result<Option<String>> {
        let picked = self.picker.pick_directory(PICKER_TITLE)?;
        Ok(picked.map(|path| path.to_string_lossy().into_owned()))
    }

    /// Pick a folder and store it as the notes directory. A cancelled
    /// pick leaves the stored config untouched.
    pub fn choose_directory(&mut self) -> Result<Option<Config>> {
        let Some(dir) = self.open_folder_dialog()? else {
            debug!("Folder selection cancelled");
            return Ok(None);
        };

        let config = Config::with_directory(dir);
        self.save_config(&config)?;
        Ok(Some(config))
    }

    pub fn load_notes(&self, config: &Config) -> Result<Vec<NoteFile>> {
        self.repository.load_all_from_dir(config)
    }

    pub fn load_note(&self, path: &Path) -> Result<NoteFile> {
        self.repository.load_one(path)
    }

    pub fn save_note(&self, config: &Config, content: &str, name: &str) -> Result<()> {
        self.repository.save_one(config, content, name)
    }
}
