//! Storage layer for the budget planner
//!
//! A small string-keyed store (files on disk, or memory in tests) holding a
//! versioned JSON snapshot of the budget, with atomic writes and automatic
//! directory creation.

pub mod file_io;
pub mod kv;
pub mod snapshot;
pub mod store;

pub use file_io::{read_optional, write_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::STORAGE_KEY;
pub use store::BudgetStore;
