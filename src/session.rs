//! Tab-scoped key/value storage for the presenter timer.
//!
//! In the browser this is `sessionStorage`: it survives reloads and in-tab
//! navigation but not a new tab. Anything implementing [`SessionStore`] can
//! stand in for it.

use crate::clock::Clock;
use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::{info, warn};

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share one map, so a clone handed to a second
/// controller behaves like a second page in the same tab.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a persisted session start epoch without seeding one.
pub fn stored_start_time<S>(store: &S, key: &str) -> Option<u64>
where
    S: SessionStore + ?Sized,
{
    let raw = store.get(key)?;
    match raw.trim().parse::<u64>() {
        Ok(start) => Some(start),
        Err(err) => {
            warn!(%key, value = %raw, "Discarding unreadable timer start: {err}");
            None
        }
    }
}

/// Read the session start epoch, seeding and persisting it when absent.
///
/// An unparseable stored value is replaced. A failed write still returns the
/// fresh epoch so the current page keeps timing.
pub fn load_or_seed_start_time<S, C>(store: &S, clock: &C, key: &str) -> u64
where
    S: SessionStore + ?Sized,
    C: Clock + ?Sized,
{
    if let Some(start) = stored_start_time(store, key) {
        return start;
    }

    let now = clock.now_millis();
    match store.set(key, &now.to_string()) {
        Ok(()) => info!(%key, start = now, "Seeded presenter session timer"),
        Err(err) => warn!(%key, "Timer start not persisted; elapsed time resets on reload: {err:#}"),
    }
    now
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::ManualClock;
    use anyhow::anyhow;

    const KEY: &str = "presenterStartTime";

    struct ReadOnlyStore;

    impl SessionStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow!("storage disabled"))
        }
    }

    #[test]
    fn seeds_when_absent_and_reuses_afterwards() {
        let store = MemorySessionStore::new();
        let clock = ManualClock::at(1_000);

        assert_eq!(load_or_seed_start_time(&store, &clock, KEY), 1_000);
        assert_eq!(store.get(KEY).as_deref(), Some("1000"));

        clock.advance(60_000);
        assert_eq!(load_or_seed_start_time(&store, &clock, KEY), 1_000);
    }

    #[test]
    fn clones_share_entries() {
        let store = MemorySessionStore::new();
        let other_page = store.clone();
        store.set(KEY, "42").unwrap();
        assert_eq!(other_page.get(KEY).as_deref(), Some("42"));
    }

    #[test]
    fn garbage_value_is_reseeded() {
        let store = MemorySessionStore::new();
        store.set(KEY, "yesterday").unwrap();
        let clock = ManualClock::at(9_000);

        assert_eq!(load_or_seed_start_time(&store, &clock, KEY), 9_000);
        assert_eq!(store.get(KEY).as_deref(), Some("9000"));
    }

    #[test]
    fn stored_start_time_never_seeds() {
        let store = MemorySessionStore::new();
        assert_eq!(stored_start_time(&store, KEY), None);
        assert_eq!(store.get(KEY), None);

        store.set(KEY, " 1234 ").unwrap();
        assert_eq!(stored_start_time(&store, KEY), Some(1_234));
        store.set(KEY, "soon").unwrap();
        assert_eq!(stored_start_time(&store, KEY), None);
    }

    #[test]
    fn failed_write_still_yields_a_start_time() {
        let clock = ManualClock::at(5_000);
        assert_eq!(load_or_seed_start_time(&ReadOnlyStore, &clock, KEY), 5_000);
    }
}
