//! Local storage mirrored to the save endpoint

use async_trait::async_trait;
use planejaqui_core::{save_logged, Item, PersistResult, Persistence};

/// The primary store is authoritative; the secondary receives a
/// best-effort copy
pub struct Mirrored<P, R> {
    primary: P,
    secondary: R,
}

impl<P: Persistence, R: Persistence> Mirrored<P, R> {
    pub fn new(primary: P, secondary: R) -> Self {
        Self { primary, secondary }
    }
}

#[async_trait(?Send)]
impl<P: Persistence, R: Persistence> Persistence for Mirrored<P, R> {
    /// Falls back to the secondary only while the primary holds nothing
    async fn load(&self) -> PersistResult<Vec<Item>> {
        let local = self.primary.load().await?;
        if !local.is_empty() {
            return Ok(local);
        }
        match self.secondary.load().await {
            Ok(remote) => Ok(remote),
            Err(e) => {
                log::warn!("[MIRROR] Endpoint unavailable on load: {}", e);
                Ok(local)
            }
        }
    }

    async fn save(&self, items: &[Item]) -> PersistResult<()> {
        self.primary.save(items).await?;
        save_logged(&self.secondary, items).await;
        Ok(())
    }
}
