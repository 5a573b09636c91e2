use crate::constants::{COOKIE_CONSENT_ACCEPTED, COOKIE_CONSENT_KEY};
use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub fn has_accepted<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store.get(COOKIE_CONSENT_KEY).as_deref() == Some(COOKIE_CONSENT_ACCEPTED)
}

pub fn accept<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<(), StorageError> {
    store.set(COOKIE_CONSENT_KEY, COOKIE_CONSENT_ACCEPTED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_consent_round_trip() {
        let mut store = MemoryStore::new();
        assert!(!has_accepted(&store));
        accept(&mut store).unwrap();
        assert!(has_accepted(&store));
    }

    #[test]
    fn test_other_values_are_not_consent() {
        let mut store = MemoryStore::new();
        store.set(COOKIE_CONSENT_KEY, "true").unwrap();
        assert!(!has_accepted(&store));
    }
}
