//! Config persistence under the platform user-config directory

use crate::domain::Config;
use crate::error::Result;
use directories::BaseDirs;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Application subfolder inside the user-config directory
pub const FOLDER_NAME: &str = "seekernotes";

/// Config file name inside [`FOLDER_NAME`]
pub const FILE_NAME: &str = "config.json";

/// Reads and writes `config.json` under `<root>/seekernotes/`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at an explicit user-config directory
    pub fn new(root: PathBuf) -> Self {
        ConfigStore { root }
    }

    /// Create a store rooted at the platform user-config directory
    /// (`%AppData%`, `~/Library/Application Support`, `~/.config`)
    pub fn from_platform() -> Result<Self> {
        let base = BaseDirs::new().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine the user config directory",
            )
        })?;
        Ok(ConfigStore::new(base.config_dir().to_path_buf()))
    }

    /// Application config directory (may not exist yet)
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(FOLDER_NAME)
    }

    /// Full path of `config.json`
    pub fn config_file_path(&self) -> PathBuf {
        self.config_dir().join(FILE_NAME)
    }

    /// Create the config directory if missing and return it.
    /// Fails if the path exists but is not a directory.
    pub fn ensure_config_path_exists(&self) -> Result<PathBuf> {
        let config_dir = self.config_dir();

        match fs::metadata(&config_dir) {
            Ok(meta) if meta.is_dir() => Ok(config_dir),
            Ok(_) => Err(io::Error::other(format!(
                "config path '{}' exists but is not a directory",
                config_dir.display()
            ))
            .into()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(&config_dir)?;
                debug!("Created config directory {}", config_dir.display());
                Ok(config_dir)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load the config, writing a default one on first run
    pub fn get_config(&self) -> Result<Config> {
        let config_dir = self.ensure_config_path_exists()?;
        let config_path = config_dir.join(FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No config found, creating {}", config_path.display());
                let config = Config::default();
                self.save_config(&config)?;
                return Ok(config);
            }
            Err(e) => return Err(e.into()),
        };

        let config: Config = serde_json::from_str(&contents)?;
        debug!(
            "Loaded config from {} (directory: '{}')",
            config_path.display(),
            config.user_selected_directory
        );
        Ok(config)
    }

    /// Overwrite `config.json` with the given config.
    ///
    /// The JSON goes to a temp file in the same directory first and is
    /// then renamed into place, so readers never see a partial file.
    pub fn save_config(&self, config: &Config) -> Result<()> {
        let config_dir = self.ensure_config_path_exists()?;
        let config_path = config_dir.join(FILE_NAME);

        let contents = serde_json::to_string_pretty(config)?;
        write_atomic(&config_dir, &config_path, &contents)?;

        debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// See [`Config::is_user_dir_valid`]
    pub fn is_user_dir_valid(&self, config: &Config) -> bool {
        config.is_user_dir_valid()
    }
}

fn write_atomic(dir: &Path, path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeekerError;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_creates_directory() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().join("nested").join("config"));

        let dir = store.ensure_config_path_exists().unwrap();

        assert!(dir.is_dir());
        assert!(dir.ends_with(FOLDER_NAME));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().to_path_buf());

        let first = store.ensure_config_path_exists().unwrap();
        let second = store.ensure_config_path_exists().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_ensure_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(FOLDER_NAME), "not a dir").unwrap();
        let store = ConfigStore::new(temp.path().to_path_buf());

        let result = store.ensure_config_path_exists();

        match result.unwrap_err() {
            SeekerError::Io(e) => assert!(e.to_string().contains("not a directory")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_first_run_writes_default_config() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().to_path_buf());

        let config = store.get_config().unwrap();

        assert_eq!(config, Config::default());
        let contents = fs::read_to_string(store.config_file_path()).unwrap();
        assert_eq!(contents, "{\n  \"userSelectedDirectory\": \"\"\n}");
    }

    #[test]
    fn test_save_then_get_returns_saved_config() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().to_path_buf());
        let config = Config::with_directory("/home/someone/My Notes");

        store.save_config(&config).unwrap();

        // Fresh store, nothing cached
        let reloaded = ConfigStore::new(temp.path().to_path_buf())
            .get_config()
            .unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_save_overwrites_and_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().to_path_buf());

        store.save_config(&Config::with_directory("/a")).unwrap();
        store.save_config(&Config::with_directory("/b")).unwrap();

        assert_eq!(store.get_config().unwrap(), Config::with_directory("/b"));
        let entries: Vec<_> = fs::read_dir(store.config_dir()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().to_path_buf());
        store.ensure_config_path_exists().unwrap();
        fs::write(store.config_file_path(), "{ not json").unwrap();

        match store.get_config().unwrap_err() {
            SeekerError::Parse(_) => {}
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(temp.path().to_path_buf());
        store.ensure_config_path_exists().unwrap();
        fs::write(
            store.config_file_path(),
            r#"{"userSelectedDirectory": "/notes", "version": 2}"#,
        )
        .unwrap();

        let config = store.get_config().unwrap();
        assert_eq!(config.user_selected_directory, "/notes");
    }
}
