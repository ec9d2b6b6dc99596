//! Storage for the single persisted worker system prompt.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::atomic::{atomic_write, read_text_optional};
use crate::error::{PersistenceError, Result};

/// Default prompt file name, relative to the working directory.
pub const DEFAULT_PROMPT_FILE: &str = "worker_prompt.txt";

/// A store holding one system prompt under a fixed key.
///
/// Reads and writes always cover the whole value. There is no locking across
/// a load/save pair, so two concurrent read-modify-write cycles can lose an
/// update (last writer wins).
pub trait PromptStore: Send + Sync {
    /// Load the stored prompt, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored prompt.
    fn save(&self, prompt: &str) -> Result<()>;
}

/// Prompt store backed by a single file.
#[derive(Debug, Clone)]
pub struct FilePromptStore {
    path: PathBuf,
}

impl FilePromptStore {
    /// Create a store for the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FilePromptStore {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_FILE)
    }
}

impl PromptStore for FilePromptStore {
    fn load(&self) -> Result<Option<String>> {
        let prompt = read_text_optional(&self.path)?;
        debug!(path = %self.path.display(), found = prompt.is_some(), "Loaded prompt");
        Ok(prompt)
    }

    fn save(&self, prompt: &str) -> Result<()> {
        atomic_write(&self.path, prompt.as_bytes())?;
        debug!(path = %self.path.display(), bytes = prompt.len(), "Saved prompt");
        Ok(())
    }
}

/// In-process prompt store.
#[derive(Debug, Default)]
pub struct MemoryPromptStore {
    prompt: RwLock<Option<String>>,
}

impl MemoryPromptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a prompt.
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: RwLock::new(Some(prompt.into())),
        }
    }
}

impl PromptStore for MemoryPromptStore {
    fn load(&self) -> Result<Option<String>> {
        let prompt = self.prompt.read().map_err(|_| PersistenceError::Poisoned)?;
        Ok(prompt.clone())
    }

    fn save(&self, prompt: &str) -> Result<()> {
        let mut slot = self.prompt.write().map_err(|_| PersistenceError::Poisoned)?;
        *slot = Some(prompt.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let store = FilePromptStore::new(dir.path().join("worker_prompt.txt"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_read_after_write() {
        let dir = tempdir().unwrap();
        let store = FilePromptStore::new(dir.path().join("worker_prompt.txt"));

        store.save("Be warm and brief").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("Be warm and brief"));

        store.save("Be precise").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("Be precise"));
    }

    #[test]
    fn test_file_store_keeps_unicode() {
        let dir = tempdir().unwrap();
        let store = FilePromptStore::new(dir.path().join("prompts/worker.txt"));

        store.save("Ты — AI ассистент. ✨").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("Ты — AI ассистент. ✨"));
    }

    #[test]
    fn test_default_path() {
        let store = FilePromptStore::default();
        assert_eq!(store.path(), Path::new(DEFAULT_PROMPT_FILE));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryPromptStore::new();
        assert!(store.load().unwrap().is_none());

        store.save("first").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("first"));

        let seeded = MemoryPromptStore::with_prompt("seed");
        assert_eq!(seeded.load().unwrap().as_deref(), Some("seed"));
    }
}
