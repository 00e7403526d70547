//! Static snapshot backend
//!
//! Reads a JSON file deployed next to the app. Writes are refused here and
//! the backend is always wrapped in `ReadOnly` by `from_config`.

use async_trait::async_trait;
use planejaqui_core::persistence::codec::decode_items;
use planejaqui_core::{Item, PersistError, PersistResult, Persistence};

use super::http;

pub struct SnapshotBackend {
    url: String,
}

impl SnapshotBackend {
    pub fn new(url: &str) -> Self {
        Self { url: url.to_string() }
    }
}

#[async_trait(?Send)]
impl Persistence for SnapshotBackend {
    async fn load(&self) -> PersistResult<Vec<Item>> {
        let reply = http::get(&self.url).await?;
        if reply.status == 404 {
            log::info!("[SNAPSHOT] No snapshot at {}", self.url);
            return Ok(Vec::new());
        }
        decode_items(&reply.into_body()?)
    }

    async fn save(&self, _items: &[Item]) -> PersistResult<()> {
        Err(PersistError::Unavailable(format!("{} is read-only", self.url)))
    }
}
