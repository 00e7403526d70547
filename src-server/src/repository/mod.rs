//! Repository Layer
//!
//! Data access for the persisted collection.

mod traits;
mod json_file;


pub use traits::SnapshotRepository;
pub use json_file::JsonFileRepository;
