//! Application Context
//!
//! The registry shared via Leptos Context API. Derived figures are
//! recomputed from the collection on every read.

use std::collections::BTreeMap;

use leptos::prelude::*;
use planejaqui_core::{counts_by_category, FilteredView, Registry};

use crate::models::{Category, CategoryFilter, Draft, Item, ItemId, Summary};
use crate::persistence::{Backend, Flusher};

#[derive(Clone, Copy)]
pub struct AppContext {
    registry: RwSignal<Registry<Flusher>, LocalStorage>,
    /// Set once the initial load has finished
    pub loaded: RwSignal<bool>,
}

impl AppContext {
    pub fn new(backend: Backend) -> Self {
        Self {
            registry: RwSignal::new_local(Registry::pending(Flusher::new(backend))),
            loaded: RwSignal::new(false),
        }
    }

    /// Install the collection read at startup
    pub fn rehydrate(&self, items: Vec<Item>) {
        self.registry.update(|registry| registry.rehydrate(items));
        self.loaded.set(true);
    }

    pub fn add(&self, draft: Draft) {
        self.registry.update(|registry| {
            registry.add(draft);
        });
    }

    pub fn update(&self, id: &ItemId, draft: Draft) -> bool {
        let mut changed = false;
        self.registry.update(|registry| changed = registry.update(id, draft));
        changed
    }

    pub fn remove(&self, id: &ItemId) -> bool {
        let mut changed = false;
        self.registry.update(|registry| changed = registry.remove(id));
        changed
    }

    /// Look up an item without subscribing to the collection
    pub fn get_untracked(&self, id: &ItemId) -> Option<Item> {
        self.registry.with_untracked(|registry| registry.get(id).cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.registry.with(|registry| registry.all().is_empty())
    }

    pub fn summary(&self) -> Summary {
        self.registry.with(|registry| Summary::of(registry.all()))
    }

    pub fn counts(&self) -> BTreeMap<Category, usize> {
        self.registry.with(|registry| counts_by_category(registry.all()))
    }

    /// Items matching `filter` (cloned for rendering) and their total
    pub fn filtered_view(&self, filter: CategoryFilter) -> (Vec<Item>, f64) {
        self.registry.with(|registry| {
            let view = FilteredView::new(registry.all(), filter);
            let items = view.items.into_iter().cloned().collect();
            (items, view.total_value)
        })
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
