//! In-process backend holding the encoded blob.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::domain::Item;

use super::{codec, PersistResult, Persistence};

/// Keeps the encoded collection in memory, exactly as a durable store would
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blob: RefCell<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing blob, e.g. a bundled snapshot
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Persistence for MemoryBackend {
    async fn load(&self) -> PersistResult<Vec<Item>> {
        match self.blob.borrow().as_deref() {
            Some(raw) => codec::decode_items(raw),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, items: &[Item]) -> PersistResult<()> {
        let encoded = codec::encode_items(items)?;
        *self.blob.borrow_mut() = Some(encoded);
        Ok(())
    }
}
