use std::collections::HashMap;

use tracing::debug;

use crate::entity::Entity;
use crate::errors::ServiceError;

/// Identifier-keyed map that iterates in insertion order.
///
/// Replacing an existing key keeps its position; removing leaves a
/// tombstone so later positions stay valid. Tombstones are compacted once
/// they outnumber live entries.
#[derive(Debug, Clone)]
pub struct EntryMap<T> {
    slots: Vec<Option<(String, T)>>,
    index: HashMap<String, usize>,
}

impl<T> Default for EntryMap<T> {
    fn default() -> Self {
        Self { slots: Vec::new(), index: HashMap::new() }
    }
}

impl<T> EntryMap<T> {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, key: &str) -> Option<&T> {
        let pos = *self.index.get(key)?;
        self.slots[pos].as_ref().map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool { self.index.contains_key(key) }

    pub fn len(&self) -> usize { self.index.len() }

    pub fn is_empty(&self) -> bool { self.index.is_empty() }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(|slot| slot.as_ref().map(|(_, v)| v))
    }

    /// Insert or replace; returns the previous value.
    pub fn insert(&mut self, key: String, value: T) -> Option<T> {
        if let Some(&pos) = self.index.get(&key) {
            return self.slots[pos].replace((key, value)).map(|(_, old)| old);
        }
        self.index.insert(key.clone(), self.slots.len());
        self.slots.push(Some((key, value)));
        None
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        let pos = self.index.remove(key)?;
        let removed = self.slots[pos].take().map(|(_, v)| v);
        if self.slots.len() - self.index.len() > self.index.len() {
            self.compact();
        }
        removed
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        self.index.clear();
        for (pos, (key, _)) in self.slots.iter().flatten().enumerate() {
            self.index.insert(key.clone(), pos);
        }
    }
}

impl<T: Entity> EntryMap<T> {
    /// Store `entity` under its own identifier.
    pub fn put(&mut self, entity: T) -> T {
        let id = entity.id().to_string();
        if self.insert(id.clone(), entity.clone()).is_some() {
            debug!(%id, event = "entity_replaced", "create overwrote existing entity");
        } else {
            debug!(%id, event = "entity_created", "entity created");
        }
        entity
    }

    /// Merge `patch` into the entity under `id` and store the result.
    pub fn merge(&mut self, id: &str, patch: T::Patch) -> Result<T, ServiceError> {
        let existing = self.get(id).cloned().ok_or_else(|| ServiceError::not_found(id))?;
        let merged = existing.merge(patch);
        if merged.id() != id {
            return Err(ServiceError::IdentifierMismatch {
                expected: id.to_string(),
                found: merged.id().to_string(),
            });
        }
        self.insert(id.to_string(), merged.clone());
        debug!(%id, event = "entity_updated", "entity updated");
        Ok(merged)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let existed = self.remove(id).is_some();
        debug!(%id, existed, event = "entity_removed", "remove requested");
        existed
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}
