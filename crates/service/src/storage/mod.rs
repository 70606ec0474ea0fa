//! In-memory repository implementations
//!
//! Both forms keep their entities in an insertion-ordered `EntryMap` and
//! share its merge/replace rules, so they behave identically.

pub mod entry_map;
pub mod memory_store;
pub mod fn_store;

pub use fn_store::{in_memory_fn_repository, FnRepository};
pub use memory_store::InMemoryRepository;
