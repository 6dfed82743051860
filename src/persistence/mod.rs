//! High score persistence
//!
//! Backends:
//! - `MemoryStore`: in-process, for tests and throwaway sessions
//! - `FileStore`: JSON file with tmp → rename writes (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)
//!
//! Stores move opaque JSON strings; the table format lives in `highscores`.

use anyhow::{Result, bail};

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Key the high score table is stored under
pub const STORAGE_KEY: &str = "planeGameHighScores";

/// Durable home for the serialized high score table
pub trait ScoreStore {
    /// The stored record, or `None` if nothing has been written yet
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored record
    fn write(&mut self, json: &str) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            contents: Some(json.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail (simulates a full or locked store)
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ScoreStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, json: &str) -> Result<()> {
        if self.fail_writes {
            bail!("memory store is read-only");
        }
        self.contents = Some(json.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read().unwrap(), None);
        store.write("[]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("[]"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_memory_store_failing_writes_keep_contents() {
        let mut store = MemoryStore::with_contents("[1]");
        store.fail_writes(true);
        assert!(store.write("[2]").is_err());
        assert_eq!(store.contents(), Some("[1]"));
        assert_eq!(store.writes(), 0);
    }
}
