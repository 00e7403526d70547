//! Domain Layer
//!
//! Wishlist entities and the rules that keep them valid.
//! Nothing here touches storage, the browser or the network.

mod entity;
mod category;
mod item;
mod draft;

pub use entity::{Entity, DomainError, DomainResult};
pub use category::Category;
pub use item::{Item, ItemId};
pub use draft::{Draft, DraftInput};
