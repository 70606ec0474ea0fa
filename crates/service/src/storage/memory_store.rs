use crate::entity::Entity;
use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::storage::entry_map::EntryMap;

/// Owned in-memory repository for one entity kind.
///
/// Instances share nothing; one store per entity kind is the intended use.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    entries: EntryMap<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self { entries: EntryMap::new() }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self { Self::default() }

    /// Build a store seeded through `create`; later duplicates replace earlier ones.
    pub fn with_entities<I: IntoIterator<Item = T>>(entities: I) -> Self {
        let mut repo = Self::new();
        for entity in entities {
            repo.create(entity);
        }
        repo
    }

    /// Alias of [`Repository::remove`].
    pub fn delete(&mut self, id: &str) -> bool {
        self.remove(id)
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn find_by_id(&self, id: &str) -> Option<T> {
        self.entries.get(id).cloned()
    }

    fn find_all(&self) -> Vec<T> {
        self.entries.snapshot()
    }

    fn create(&mut self, entity: T) -> T {
        self.entries.put(entity)
    }

    fn update(&mut self, id: &str, patch: T::Patch) -> Result<T, ServiceError> {
        self.entries.merge(id, patch)
    }

    fn remove(&mut self, id: &str) -> bool {
        self.entries.delete(id)
    }

    fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
