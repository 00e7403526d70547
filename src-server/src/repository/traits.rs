//! Repository Layer - Core Traits
//!
//! The whole collection is read and replaced as one unit; there are no
//! partial updates.

use async_trait::async_trait;
use planejaqui_core::{Item, PersistResult};

/// Storage for the single item collection
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Current collection; empty when nothing was saved yet
    async fn load(&self) -> PersistResult<Vec<Item>>;

    /// Replace the stored collection, last write wins
    async fn replace(&self, items: &[Item]) -> PersistResult<()>;
}
