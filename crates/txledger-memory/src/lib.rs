//! In-memory ordered storage backend for txledger.

mod sequence;
mod skiplist;

pub use sequence::{IdGenerator, DEFAULT_ID_BASE};
pub use skiplist::SkipListStorage;
