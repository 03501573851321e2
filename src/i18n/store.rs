use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

/// A small persistent key/value store for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keeps preferences in memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each preference as a file named after its key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store under the platform config directory, falling back to the
    /// working directory.
    pub fn in_config_dir() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));

        Self::new(base.join("ehon"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Some(value.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read preference {key:?}: {e}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create state dir: {:?}", self.dir))?;

        let path = self.path(key);
        fs::write(&path, value).with_context(|| format!("Failed to write preference: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() -> Result<()> {
        let mut store = MemoryStore::new();

        assert_eq!(store.get("bookLanguage"), None);
        store.set("bookLanguage", "fr")?;
        assert_eq!(store.get("bookLanguage").as_deref(), Some("fr"));

        Ok(())
    }

    #[test]
    fn test_file_store_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("bookLanguage"), None);
        store.set("bookLanguage", "ko")?;

        let reopened = FileStore::new(dir.path().join("nested"));
        assert_eq!(reopened.get("bookLanguage").as_deref(), Some("ko"));

        Ok(())
    }

    #[test]
    fn test_file_store_trims_whitespace() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("bookLanguage"), "en\n")?;

        let store = FileStore::new(dir.path());
        assert_eq!(store.get("bookLanguage").as_deref(), Some("en"));

        Ok(())
    }
}
