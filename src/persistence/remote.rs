//! Save endpoint backend

use async_trait::async_trait;
use planejaqui_core::persistence::codec::{decode_items, encode_items};
use planejaqui_core::{Item, PersistError, PersistResult, Persistence};
use serde::Deserialize;

use super::http;

/// Response body of `POST /api/save-data`
#[derive(Debug, Deserialize)]
struct SaveAck {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct RemoteBackend {
    base: String,
}

impl RemoteBackend {
    /// `base` is the endpoint origin, empty for same origin
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait(?Send)]
impl Persistence for RemoteBackend {
    async fn load(&self) -> PersistResult<Vec<Item>> {
        let body = http::get(&self.url("/api/data")).await?.into_body()?;
        decode_items(&body)
    }

    async fn save(&self, items: &[Item]) -> PersistResult<()> {
        let payload = encode_items(items)?;
        let reply = http::post_json(&self.url("/api/save-data"), &payload).await?;
        let status = reply.status;
        let ack: SaveAck = serde_json::from_str(&reply.body)
            .map_err(|e| PersistError::Transport(format!("HTTP {}: unreadable reply: {}", status, e)))?;
        if ack.success {
            log::debug!("[REMOTE] {}", ack.message.unwrap_or_default());
            Ok(())
        } else {
            Err(PersistError::Transport(format!(
                "HTTP {}: {}",
                status,
                ack.error.unwrap_or_else(|| "save rejected".into())
            )))
        }
    }
}
