//! Planejaqui Core
//!
//! Platform-free heart of the wishlist:
//! - domain: items, categories and drafts
//! - store: ordered item collection and the registry that flushes mutations
//! - view: category counts, filtering and totals
//! - persistence: collection codec and the backend capability
//! - format: pt-BR display helpers

pub mod domain;
pub mod store;
pub mod view;
pub mod persistence;
pub mod format;

pub use domain::{Category, DomainError, DomainResult, Draft, DraftInput, Entity, Item, ItemId};
pub use persistence::{load_or_empty, save_logged, MemoryBackend, PersistError, PersistResult, Persistence, ReadOnly};
pub use store::{ItemStore, Registry, SnapshotSink};
pub use view::{counts_by_category, filtered, planned_count, total_value, CategoryFilter, FilteredView, Summary};
