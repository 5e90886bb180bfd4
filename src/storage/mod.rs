//! Item persistence.
//!
//! All items live in a single JSON config file which is rewritten in full
//! whenever an item is appended.

mod error;
mod store;

pub use error::StorageError;
pub use store::{ItemSink, ItemStore};
