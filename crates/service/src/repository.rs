use crate::entity::Entity;
use crate::errors::ServiceError;

/// CRUD access over a keyed collection of entities.
///
/// Absence is a value, not an error: `find_by_id` returns `None` and `remove`
/// returns `false` for an unknown identifier. Only `update` fails on a
/// missing entity.
pub trait Repository<T: Entity> {
    fn find_by_id(&self, id: &str) -> Option<T>;

    /// Owned snapshot in insertion order.
    fn find_all(&self) -> Vec<T>;

    /// Insert under `entity.id()`, replacing any entity with the same identifier.
    fn create(&mut self, entity: T) -> T;

    /// Shallow-merge `patch` into the entity stored under `id`.
    fn update(&mut self, id: &str, patch: T::Patch) -> Result<T, ServiceError>;

    /// Returns whether an entity was removed.
    fn remove(&mut self, id: &str) -> bool;

    /// Like `create`, but refuses to replace an existing identifier.
    fn create_unique(&mut self, entity: T) -> Result<T, ServiceError> {
        if self.contains(entity.id()) {
            return Err(ServiceError::conflict(entity.id()));
        }
        Ok(self.create(entity))
    }

    fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    fn len(&self) -> usize {
        self.find_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
