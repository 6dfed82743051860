//! Browser LocalStorage store (wasm32 only)

use anyhow::{Result, anyhow};

use super::{STORAGE_KEY, ScoreStore};

/// High scores under a single LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| anyhow!("no window"))?
            .local_storage()
            .map_err(|err| anyhow!("LocalStorage unavailable: {err:?}"))?
            .ok_or_else(|| anyhow!("LocalStorage disabled"))
    }
}

impl ScoreStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|err| anyhow!("reading {}: {err:?}", self.key))
    }

    fn write(&mut self, json: &str) -> Result<()> {
        Self::storage()?
            .set_item(&self.key, json)
            .map_err(|err| anyhow!("writing {}: {err:?}", self.key))
    }
}
