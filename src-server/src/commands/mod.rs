//! Commands Layer
//!
//! HTTP handlers that bridge the UI to the data file.

mod data_cmd;

pub use data_cmd::*;
