use shared::storage::{load_roster, PersistedRoster};
use shared::{Roster, WheelError};
use yew::prelude::*;

use crate::storage::BrowserStore;

/// Roster state backed by `localStorage`. Each mutation produces a new
/// snapshot, written through before it is published to the component.
#[derive(Clone, PartialEq)]
pub struct UseRosterHandle {
    inner: UseStateHandle<Roster>,
}

impl UseRosterHandle {
    pub fn roster(&self) -> &Roster {
        &self.inner
    }

    pub fn add(&self, name: &str) -> Result<(), WheelError> {
        let mut persisted = PersistedRoster::new((*self.inner).clone(), BrowserStore);
        persisted.add(name)?;
        self.inner.set(persisted.into_roster());
        Ok(())
    }

    pub fn remove(&self, name: &str) {
        let mut persisted = PersistedRoster::new((*self.inner).clone(), BrowserStore);
        if persisted.remove(name) {
            self.inner.set(persisted.into_roster());
        }
    }
}

#[hook]
pub fn use_roster() -> UseRosterHandle {
    let inner = use_state(|| {
        let roster = load_roster(&BrowserStore);
        log::debug!("Loaded {} saved names", roster.count());
        roster
    });
    UseRosterHandle { inner }
}
