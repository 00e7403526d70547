//! Local storage backend
//!
//! The whole collection is one JSON string under a single key.

use async_trait::async_trait;
use planejaqui_core::persistence::codec::{decode_items, encode_items};
use planejaqui_core::{Item, PersistError, PersistResult, Persistence};
use web_sys::Storage;

use super::js_error;

pub struct LocalStorageBackend {
    key: String,
}

impl LocalStorageBackend {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage(&self) -> PersistResult<Storage> {
        let window = web_sys::window()
            .ok_or_else(|| PersistError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| PersistError::Unavailable(js_error(e)))?
            .ok_or_else(|| PersistError::Unavailable("local storage disabled".into()))
    }
}

#[async_trait(?Send)]
impl Persistence for LocalStorageBackend {
    async fn load(&self) -> PersistResult<Vec<Item>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| PersistError::Storage(js_error(e)))?;
        match raw {
            Some(raw) => decode_items(&raw),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, items: &[Item]) -> PersistResult<()> {
        let raw = encode_items(items)?;
        self.storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| PersistError::Storage(js_error(e)))
    }
}
