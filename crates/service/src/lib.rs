//! Generic in-memory entity store.
//! - `Repository` is the CRUD contract over identifier-keyed entities.
//! - `storage` provides the owned and the closure-assembled implementations.
//! - `entity` defines the identifier/merge capability and the demo records.

pub mod errors;
pub mod entity;
pub mod repository;
pub mod storage;

pub use entity::{Entity, ProductPatch, Record, UserPatch};
pub use errors::ServiceError;
pub use repository::Repository;
pub use storage::{in_memory_fn_repository, FnRepository, InMemoryRepository};
