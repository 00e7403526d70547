//! Persistence Adapter
//!
//! The durable side of the registry: a backend loads the collection once at
//! startup and receives the full collection after every mutation. Failures
//! are logged and never reach the user; the in-memory store stays the source
//! of truth for the session.

pub mod codec;
mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DomainError, Item};

pub use memory::MemoryBackend;

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence-level errors
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("malformed collection: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("invalid record: {0}")]
    Invalid(#[from] DomainError),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// A durable home for the item collection
///
/// Futures are not `Send`: backends run on the single UI thread.
#[async_trait(?Send)]
pub trait Persistence {
    /// Read the whole collection
    async fn load(&self) -> PersistResult<Vec<Item>>;

    /// Replace the stored collection with `items`
    async fn save(&self, items: &[Item]) -> PersistResult<()>;
}

/// Load the collection, falling back to an empty one on any failure
pub async fn load_or_empty<P: Persistence + ?Sized>(backend: &P) -> Vec<Item> {
    match backend.load().await {
        Ok(items) => {
            log::info!("[PERSIST] Loaded {} items", items.len());
            items
        }
        Err(e) => {
            log::error!("[PERSIST] Failed to load saved items, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Save the collection, logging instead of propagating failures
pub async fn save_logged<P: Persistence + ?Sized>(backend: &P, items: &[Item]) {
    match backend.save(items).await {
        Ok(()) => log::debug!("[PERSIST] Saved {} items", items.len()),
        Err(e) => log::error!("[PERSIST] Failed to save items: {}", e),
    }
}

/// Backend wrapper that never writes back (bundled static snapshot)
pub struct ReadOnly<P>(pub P);

#[async_trait(?Send)]
impl<P: Persistence> Persistence for ReadOnly<P> {
    async fn load(&self) -> PersistResult<Vec<Item>> {
        self.0.load().await
    }

    async fn save(&self, items: &[Item]) -> PersistResult<()> {
        log::debug!("[PERSIST] Read-only snapshot, dropping write of {} items", items.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Draft};

    struct Broken;

    #[async_trait(?Send)]
    impl Persistence for Broken {
        async fn load(&self) -> PersistResult<Vec<Item>> {
            Err(PersistError::Transport("connection refused".into()))
        }

        async fn save(&self, _items: &[Item]) -> PersistResult<()> {
            Err(PersistError::Storage("quota exceeded".into()))
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item::from_draft(Draft::new("Sofá", Category::LivingRoom, 1200.0).unwrap()),
            Item::from_draft(
                Draft::new("Panela", Category::Kitchen, 0.0)
                    .unwrap()
                    .with_store_link(""),
            ),
        ]
    }

    #[tokio::test]
    async fn test_load_failure_starts_empty() {
        assert!(load_or_empty(&Broken).await.is_empty());
        save_logged(&Broken, &items()).await;
    }

    #[tokio::test]
    async fn test_malformed_blob_starts_empty() {
        let backend = MemoryBackend::with_blob("[{\"id\": 1}");
        assert!(load_or_empty(&backend).await.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let backend = MemoryBackend::new();
        assert!(backend.load().await.unwrap().is_empty());

        let items = items();
        backend.save(&items).await.unwrap();
        assert_eq!(backend.load().await.unwrap(), items);

        backend.save(&[]).await.unwrap();
        assert!(backend.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_only_drops_writes() {
        let inner = MemoryBackend::new();
        inner.save(&items()).await.unwrap();
        let backend = ReadOnly(inner);

        backend.save(&[]).await.unwrap();
        assert_eq!(backend.load().await.unwrap().len(), 2);
    }
}
