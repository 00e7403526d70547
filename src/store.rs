//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! presentation state. The item collection itself lives in `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CategoryFilter, ItemId};

/// Scroll offset after which the header collapses
pub const COMPACT_SCROLL_PX: f64 = 100.0;

/// Presentation state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Category selected in the filter panel
    pub filter: CategoryFilter,
    /// Item being edited (None = creating)
    pub editing: Option<ItemId>,
    pub modal_open: bool,
    pub filters_open: bool,
    /// Page scrolled past `COMPACT_SCROLL_PX`
    pub scrolled: bool,
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the form for a new item
pub fn open_create(store: &UiStore) {
    store.editing().set(None);
    store.modal_open().set(true);
}

/// Open the form prefilled with an existing item
pub fn open_edit(store: &UiStore, id: ItemId) {
    store.editing().set(Some(id));
    store.modal_open().set(true);
}

pub fn close_form(store: &UiStore) {
    store.modal_open().set(false);
    store.editing().set(None);
}

pub fn toggle_filters(store: &UiStore) {
    store.filters_open().update(|open| *open = !*open);
}

pub fn select_filter(store: &UiStore, filter: CategoryFilter) {
    store.filter().set(filter);
}

/// Update the compact flag only when it actually flips
pub fn set_scroll_offset(store: &UiStore, offset: f64) {
    let scrolled = offset > COMPACT_SCROLL_PX;
    if store.scrolled().get_untracked() != scrolled {
        store.scrolled().set(scrolled);
    }
}
