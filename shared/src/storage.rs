//! Durable key-value persistence for the roster.

use std::collections::HashMap;

use crate::constants::NAMES_STORAGE_KEY;
use crate::error::{StorageError, WheelError};
use crate::roster::Roster;

/// Synchronous string store, one atomic write per call.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store, used in tests and as a fallback when the browser
/// refuses access to `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn save_roster<S: KeyValueStore + ?Sized>(store: &mut S, roster: &Roster) -> Result<(), StorageError> {
    let serialized = serde_json::to_string(roster)?;
    store.set(NAMES_STORAGE_KEY, &serialized)
}

/// Loads the stored roster. Missing or unreadable data yields an empty roster.
pub fn load_roster<S: KeyValueStore + ?Sized>(store: &S) -> Roster {
    let Some(saved) = store.get(NAMES_STORAGE_KEY) else {
        return Roster::new();
    };
    match serde_json::from_str::<Roster>(&saved) {
        Ok(roster) => roster,
        Err(e) => {
            log::warn!("Ignoring malformed stored names: {}", e);
            Roster::new()
        }
    }
}

/// A roster bound to its store; each successful mutation is written through.
pub struct PersistedRoster<S: KeyValueStore> {
    roster: Roster,
    store: S,
}

impl<S: KeyValueStore> PersistedRoster<S> {
    pub fn new(roster: Roster, store: S) -> Self {
        Self { roster, store }
    }

    pub fn load(store: S) -> Self {
        let roster = load_roster(&store);
        Self { roster, store }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn add(&mut self, name: &str) -> Result<(), WheelError> {
        self.roster.add(name)?;
        self.persist();
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.roster.remove(name);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // Write failures leave the in-memory roster authoritative.
    fn persist(&mut self) {
        if let Err(e) = save_roster(&mut self.store, &self.roster) {
            log::warn!("Failed to save names: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_round_trip_through_fresh_state() {
        let mut persisted = PersistedRoster::load(MemoryStore::new());
        for name in ["Ana", "Bo", "Cy"] {
            persisted.add(name).unwrap();
        }
        persisted.remove("Bo");
        persisted.add("Dee").unwrap();
        let store = persisted.into_store();

        let reloaded = PersistedRoster::load(store);
        assert_eq!(reloaded.roster().list(), &["Ana", "Cy", "Dee"]);
    }

    #[test]
    fn test_saved_format_is_json_array() {
        let mut store = MemoryStore::new();
        save_roster(&mut store, &Roster::from_names(["Ana", "Bo"])).unwrap();
        assert_eq!(store.get(NAMES_STORAGE_KEY).as_deref(), Some(r#"["Ana","Bo"]"#));
    }

    #[test]
    fn test_missing_or_malformed_loads_empty() {
        let mut store = MemoryStore::new();
        assert!(load_roster(&store).is_empty());

        for bad in ["not json", "{\"a\":1}", "[1,2,3]", ""] {
            store.set(NAMES_STORAGE_KEY, bad).unwrap();
            assert!(load_roster(&store).is_empty(), "input {:?}", bad);
        }
    }

    #[test]
    fn test_rejected_add_does_not_write() {
        let mut persisted = PersistedRoster::load(MemoryStore::new());
        persisted.add("Ana").unwrap();
        assert!(persisted.add("Ana").is_err());
        assert!(persisted.add("  ").is_err());
        let store = persisted.into_store();
        assert_eq!(store.get(NAMES_STORAGE_KEY).as_deref(), Some(r#"["Ana"]"#));
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut persisted = PersistedRoster::load(FailingStore);
        persisted.add("Ana").unwrap();
        persisted.add("Bo").unwrap();
        assert_eq!(persisted.roster().count(), 2);
    }
}
