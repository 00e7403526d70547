//! Browser Persistence Backends
//!
//! Backends for the registry, organized by where the collection lives.

mod http;
mod mirrored;
mod remote;
mod snapshot;
mod storage;

use std::rc::Rc;

use leptos::task::spawn_local;
use planejaqui_core::{save_logged, Item, Persistence, ReadOnly, SnapshotSink};
use wasm_bindgen::JsValue;

use crate::config::{AppConfig, PersistenceMode};

pub use mirrored::Mirrored;
pub use remote::RemoteBackend;
pub use snapshot::SnapshotBackend;
pub use storage::LocalStorageBackend;

/// Shared handle to the configured backend
pub type Backend = Rc<dyn Persistence>;

/// Build the backend selected by the page configuration
pub fn from_config(config: &AppConfig) -> Backend {
    log::info!("[PERSIST] Using {} persistence", config.mode);
    match config.mode {
        PersistenceMode::Local => Rc::new(LocalStorageBackend::new(&config.storage_key)),
        PersistenceMode::Remote => Rc::new(RemoteBackend::new(&config.endpoint)),
        PersistenceMode::Snapshot => Rc::new(ReadOnly(SnapshotBackend::new(&config.snapshot_url))),
        PersistenceMode::Mirrored => Rc::new(Mirrored::new(
            LocalStorageBackend::new(&config.storage_key),
            RemoteBackend::new(&config.endpoint),
        )),
    }
}

/// Registry sink that writes each snapshot in the background
#[derive(Clone)]
pub struct Flusher {
    backend: Backend,
}

impl Flusher {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }
}

impl SnapshotSink for Flusher {
    fn flush(&self, snapshot: &[Item]) {
        let backend = self.backend.clone();
        let items = snapshot.to_vec();
        spawn_local(async move {
            save_logged(backend.as_ref(), &items).await;
        });
    }
}

/// Readable message from a JS exception value
pub(crate) fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
