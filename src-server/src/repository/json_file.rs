//! JSON File Repository
//!
//! Keeps the collection in one pretty-printed JSON file, replaced atomically.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use planejaqui_core::persistence::codec;
use planejaqui_core::{Item, PersistError, PersistResult};
use tokio::fs;
use tokio::sync::Mutex;

use super::traits::SnapshotRepository;

pub struct JsonFileRepository {
    path: PathBuf,
    /// Serializes writers so temp files never interleave
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotRepository for JsonFileRepository {
    async fn load(&self) -> PersistResult<Vec<Item>> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => codec::decode_items(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(PersistError::Storage(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn replace(&self, items: &[Item]) -> PersistResult<()> {
        let encoded = codec::encode_items(items)?;
        let _guard = self.write_lock.lock().await;
        atomic_write(&self.path, encoded.as_bytes()).await
    }
}

async fn atomic_write(path: &Path, bytes: &[u8]) -> PersistResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(|e| {
            PersistError::Storage(format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).await.map_err(|e| {
        PersistError::Storage(format!("Failed to write temp file '{}': {}", tmp.display(), e))
    })?;

    fs::rename(&tmp, path).await.map_err(|e| {
        PersistError::Storage(format!(
            "Failed to rename temp file '{}' -> '{}': {}",
            tmp.display(),
            path.display(),
            e
        ))
    })?;
    Ok(())
}
