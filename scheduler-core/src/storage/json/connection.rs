use crate::storage::traits::KeyValueStore;
use anyhow::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// JsonConnection maps storage keys onto JSON documents in a base directory.
/// Each key becomes one file, so "familyMembers" lives in familyMembers.json.
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection rooted at a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new connection in the default data directory,
    /// ~/Documents/Family Scheduler
    pub fn new_default() -> Result<Self> {
        // Get the user's home directory and construct the Documents path
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let documents_dir = PathBuf::from(home_dir).join("Documents");
        Self::new(documents_dir.join("Family Scheduler"))
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonConnection {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.file_path(key);
        if !file_path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&file_path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let file_path = self.file_path(key);

        // Write to a temporary file first, then rename for atomic operation
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &file_path)?;

        debug!("Persisted {} bytes under key '{}'", value.len(), key);
        Ok(())
    }
}
