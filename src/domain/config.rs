//! Persisted application config

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The single config record stored in `config.json`.
///
/// Unknown fields are ignored and a missing directory reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub user_selected_directory: String,
}

impl Config {
    /// Create a config pointing at the given notes directory
    pub fn with_directory(dir: impl Into<String>) -> Self {
        Config {
            user_selected_directory: dir.into(),
        }
    }

    /// Notes directory as a path
    pub fn user_dir(&self) -> &Path {
        Path::new(&self.user_selected_directory)
    }

    /// A directory is usable when it is set, is not a filesystem root,
    /// exists and is a directory. Only stats the path.
    pub fn is_user_dir_valid(&self) -> bool {
        if self.user_selected_directory.is_empty() {
            return false;
        }

        // Resolves "/.." and symlinks to the root before the root check
        match fs::canonicalize(self.user_dir()) {
            Ok(dir) => dir.parent().is_some() && dir.is_dir(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_empty() {
        let config = Config::default();
        assert_eq!(config.user_selected_directory, "");
        assert!(!config.is_user_dir_valid());
    }

    #[test]
    fn test_root_is_not_valid() {
        assert!(!Config::with_directory("/").is_user_dir_valid());
        assert!(!Config::with_directory("/..").is_user_dir_valid());
        if cfg!(windows) {
            assert!(!Config::with_directory("C:\\").is_user_dir_valid());
        }
    }

    #[test]
    fn test_existing_directory_is_valid() {
        let temp = TempDir::new().unwrap();
        let config = Config::with_directory(temp.path().to_string_lossy());
        assert!(config.is_user_dir_valid());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_root_is_not_valid() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("root-link");
        std::os::unix::fs::symlink("/", &link).unwrap();

        let config = Config::with_directory(link.to_string_lossy());
        assert!(!config.is_user_dir_valid());
    }

    #[test]
    fn test_missing_directory_is_not_valid() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let config = Config::with_directory(missing.to_string_lossy());
        assert!(!config.is_user_dir_valid());
    }

    #[test]
    fn test_regular_file_is_not_valid() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let config = Config::with_directory(file.to_string_lossy());
        assert!(!config.is_user_dir_valid());
    }

    #[test]
    fn test_serializes_camel_case() {
        let config = Config::with_directory("/home/me/notes");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"userSelectedDirectory":"/home/me/notes"}"#);
    }

    #[test]
    fn test_missing_and_unknown_fields() {
        let config: Config = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config, Config::default());
    }
}
