//! Item Store
//!
//! Ordered in-memory collection of items (most recent first) and the
//! registry that flushes every mutation to an injected sink.

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult, Draft, Entity, Item, ItemId};

/// Ordered collection of items with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from persisted records, keeping the first of any repeated id
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id().clone());
                if !fresh {
                    log::warn!("[STORE] Dropping duplicate item id {}", item.id);
                }
                fresh
            })
            .collect();
        Self { items }
    }

    /// Create an item from a draft and prepend it
    pub fn add(&mut self, draft: Draft) -> &Item {
        self.items.insert(0, Item::from_draft(draft));
        &self.items[0]
    }

    /// Prepend an already built item
    pub fn insert(&mut self, item: Item) -> DomainResult<()> {
        if self.position(item.id()).is_some() {
            return Err(DomainError::Conflict(format!("item {} already exists", item.id)));
        }
        self.items.insert(0, item);
        Ok(())
    }

    /// Replace the item's fields, keeping id, creation time and position
    ///
    /// Returns false when no item has this id.
    pub fn update(&mut self, id: &ItemId, draft: Draft) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items[index] = self.items[index].revised(draft);
                true
            }
            None => false,
        }
    }

    /// Remove the item, returning false when it was not present
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Current ordered snapshot
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

/// Fire-and-forget receiver of the full collection after each mutation
pub trait SnapshotSink {
    fn flush(&self, snapshot: &[Item]);
}

impl<F> SnapshotSink for F
where
    F: Fn(&[Item]),
{
    fn flush(&self, snapshot: &[Item]) {
        self(snapshot)
    }
}

/// Item store bound to its persistence sink
///
/// Every successful mutation flushes the new snapshot exactly once;
/// no-op mutations flush nothing.
pub struct Registry<S: SnapshotSink> {
    store: ItemStore,
    sink: S,
    /// False until the stored collection has been installed
    hydrated: bool,
}

impl<S: SnapshotSink> Registry<S> {
    pub fn new(store: ItemStore, sink: S) -> Self {
        Self { store, sink, hydrated: true }
    }

    /// Empty registry whose stored collection is still loading
    ///
    /// Mutations apply in memory right away but nothing is flushed until
    /// `rehydrate`, so an early write cannot replace the stored collection.
    pub fn pending(sink: S) -> Self {
        Self { store: ItemStore::new(), sink, hydrated: false }
    }

    /// Add a new item and return the updated collection
    pub fn add(&mut self, draft: Draft) -> &[Item] {
        let item = self.store.add(draft);
        log::debug!("[STORE] Added item {} ({})", item.id, item.name);
        self.flush();
        self.store.all()
    }

    pub fn update(&mut self, id: &ItemId, draft: Draft) -> bool {
        let changed = self.store.update(id, draft);
        if changed {
            log::debug!("[STORE] Updated item {}", id);
            self.flush();
        }
        changed
    }

    pub fn remove(&mut self, id: &ItemId) -> bool {
        let changed = self.store.remove(id);
        if changed {
            log::debug!("[STORE] Removed item {}", id);
            self.flush();
        }
        changed
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    pub fn all(&self) -> &[Item] {
        self.store.all()
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Replace the collection with a loaded snapshot.
    ///
    /// The snapshot came from the sink's own backend, so nothing is flushed
    /// unless items added before the load finished had to be merged in.
    pub fn rehydrate(&mut self, items: Vec<Item>) {
        self.hydrated = true;
        let pending = std::mem::take(&mut self.store);
        self.store = ItemStore::from_items(items);
        if pending.is_empty() {
            return;
        }
        for item in pending.items.into_iter().rev() {
            if let Err(e) = self.store.insert(item) {
                log::warn!("[STORE] Dropped pending item: {}", e);
            }
        }
        self.flush();
    }

    fn flush(&self) {
        if !self.hydrated {
            log::debug!("[STORE] Load pending, holding flush of {} items", self.store.len());
            return;
        }
        self.sink.flush(self.store.all());
    }
}
