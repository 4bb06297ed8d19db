use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use agenda_core::{Record, ValidationError};

/// Sizing knobs for a registry's backing map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Initial capacity of the map.
    pub capacity: usize,
    /// Shard count. Must be a power of two greater than 1 when set.
    pub shards: Option<usize>,
}

/// Concurrent keyed store for one entity kind.
///
/// Operations report success as a plain `bool`; the validation detail from a
/// failed update is logged and dropped. Updates run while holding the entry's
/// shard lock, so concurrent updates to one id are serialized.
pub struct Registry<E: Record> {
    entries: DashMap<String, E>,
}

impl<E: Record> Registry<E> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let entries = match config.shards {
            Some(shards) => DashMap::with_capacity_and_shard_amount(config.capacity, shards),
            None => DashMap::with_capacity(config.capacity),
        };
        Self { entries }
    }

    /// Store `entity` unless its id is already taken.
    /// An existing entry is never overwritten.
    pub fn add(&self, entity: E) -> bool {
        match self.entries.entry(entity.id().to_owned()) {
            Entry::Occupied(_) => {
                tracing::debug!(kind = E::KIND, id = entity.id(), "add rejected: duplicate id");
                false
            }
            Entry::Vacant(slot) => {
                tracing::debug!(kind = E::KIND, id = entity.id(), "added");
                slot.insert(entity);
                true
            }
        }
    }

    /// Remove the entity with this id. Returns false if there was none.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.entries.remove(id).is_some();
        if removed {
            tracing::debug!(kind = E::KIND, id, "deleted");
        } else {
            tracing::debug!(kind = E::KIND, id, "delete rejected: unknown id");
        }
        removed
    }

    /// Apply a validating setter to the stored entity.
    ///
    /// Returns false when the id is unknown or the setter rejects the value.
    /// The setter runs on a copy that replaces the stored entity only on
    /// success, so a rejected update never leaves a partial write behind.
    /// The shard guard is held throughout; `setter` must not call back
    /// into this registry.
    pub(crate) fn update<F>(&self, id: &str, field: &'static str, setter: F) -> bool
    where
        F: FnOnce(&mut E) -> Result<(), ValidationError>,
    {
        if !self.exists(id) {
            tracing::debug!(kind = E::KIND, id, field, "update rejected: unknown id");
            return false;
        }
        // The entry may have been deleted since the existence check.
        let Some(mut entity) = self.entries.get_mut(id) else {
            tracing::debug!(kind = E::KIND, id, field, "update rejected: unknown id");
            return false;
        };
        let mut draft = entity.value().clone();
        match setter(&mut draft) {
            Ok(()) => {
                *entity.value_mut() = draft;
                tracing::debug!(kind = E::KIND, id, field, "updated");
                true
            }
            Err(e) => {
                tracing::debug!(kind = E::KIND, id, field, error = %e, "update rejected");
                false
            }
        }
    }

    /// Copy of the entity stored under `id`.
    pub fn get(&self, id: &str) -> Option<E> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Copies of every stored entity, ordered by id.
    pub fn snapshot(&self) -> Vec<E> {
        let mut all: Vec<E> = self
            .entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn exists(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }
}

impl<E: Record> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::Task;

    fn make_task(id: &str) -> Task {
        Task::new(id.to_string(), "Name".to_string(), "Description".to_string()).unwrap()
    }

    #[test]
    fn test_add_rejects_duplicate_and_keeps_original() {
        let registry = Registry::new();

        assert!(registry.add(make_task("T1")));

        let mut other = make_task("T1");
        other.set_name("Other".to_string()).unwrap();
        assert!(!registry.add(other));

        assert_eq!(registry.get("T1").unwrap().name(), "Name");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_delete() {
        let registry = Registry::new();

        assert!(!registry.delete("T1"));
        registry.add(make_task("T1"));
        assert!(registry.delete("T1"));
        assert!(!registry.delete("T1"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_unknown_id() {
        let registry: Registry<Task> = Registry::new();

        let updated = registry.update("T1", "name", |t| t.set_name("Valid".to_string()));
        assert!(!updated);
    }

    #[test]
    fn test_update_applies_or_rejects() {
        let registry = Registry::new();
        registry.add(make_task("T1"));

        assert!(registry.update("T1", "name", |t| t.set_name("New".to_string())));
        assert_eq!(registry.get("T1").unwrap().name(), "New");

        assert!(!registry.update("T1", "name", |t| t.set_name("n".repeat(21))));
        assert_eq!(registry.get("T1").unwrap().name(), "New");
    }

    #[test]
    fn test_failed_multi_field_update_is_discarded() {
        let registry = Registry::new();
        registry.add(make_task("T1"));

        // First write succeeds, second is rejected; neither may stick.
        let updated = registry.update("T1", "name", |t| {
            t.set_name("Changed".to_string())?;
            t.set_description(String::new())
        });
        assert!(!updated);

        let stored = registry.get("T1").unwrap();
        assert_eq!(stored.name(), "Name");
        assert_eq!(stored.description(), "Description");
    }

    #[test]
    fn test_multi_field_update_applies_together() {
        let registry = Registry::new();
        registry.add(make_task("T1"));

        assert!(registry.update("T1", "name", |t| {
            t.set_name("Changed".to_string())?;
            t.set_description("Both".to_string())
        }));

        let stored = registry.get("T1").unwrap();
        assert_eq!(stored.name(), "Changed");
        assert_eq!(stored.description(), "Both");
    }

    #[test]
    fn test_get_returns_copy() {
        let registry = Registry::new();
        registry.add(make_task("T1"));

        let mut copy = registry.get("T1").unwrap();
        copy.set_name("Local".to_string()).unwrap();

        assert_eq!(registry.get("T1").unwrap().name(), "Name");
        assert!(registry.get("T2").is_none());
    }

    #[test]
    fn test_snapshot_sorted_by_id() {
        let registry = Registry::new();
        registry.add(make_task("c"));
        registry.add(make_task("a"));
        registry.add(make_task("b"));

        let ids: Vec<String> = registry
            .snapshot()
            .iter()
            .map(|t| t.task_id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_with_config() {
        let registry: Registry<Task> = Registry::with_config(RegistryConfig {
            capacity: 64,
            shards: Some(8),
        });
        assert!(registry.is_empty());
        assert!(registry.add(make_task("T1")));
    }

    #[test]
    fn test_concurrent_add_same_id() {
        let registry = Registry::new();

        let wins = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| registry.add(make_task("T1"))))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|added| *added)
                .count()
        });

        assert_eq!(wins, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_updates_same_id() {
        let registry = Registry::new();
        registry.add(make_task("T1"));

        let names: Vec<String> = (0..16).map(|i| format!("name-{i}")).collect();

        std::thread::scope(|s| {
            for name in &names {
                let registry = &registry;
                s.spawn(move || {
                    assert!(registry.update("T1", "name", |t| t.set_name(name.clone())));
                });
            }
        });

        let stored = registry.get("T1").unwrap();
        assert!(names.iter().any(|n| n == stored.name()));
    }
}
