use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_KEY: &str = "bookshelf_books";
pub const DEFAULT_EXPORT_PREFIX: &str = "bookshelf-export";
pub const DEFAULT_DB_FILE: &str = "bookshelf.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryConfig {
    /// Slot key holding the collection snapshot
    pub storage_key: String,
    /// SQLite file; `bookshelf.db` in the data dir when unset
    pub database_path: Option<PathBuf>,
    /// Populate the sample books when no snapshot exists yet
    pub seed_when_empty: bool,
    pub export_prefix: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        LibraryConfig {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            database_path: None,
            seed_when_empty: true,
            export_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
        }
    }
}

impl LibraryConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: LibraryConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(StoreError::Config("storageKey cannot be empty".to_string()));
        }
        if self.export_prefix.trim().is_empty() {
            return Err(StoreError::Config("exportPrefix cannot be empty".to_string()));
        }
        if self
            .export_prefix
            .chars()
            .any(|ch| matches!(ch, '/' | '\\'))
        {
            return Err(StoreError::Config(
                "exportPrefix cannot contain path separators".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolve_database_path(&self, data_dir: &Path) -> PathBuf {
        match &self.database_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_DB_FILE),
        }
    }
}
