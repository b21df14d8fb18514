//! In-memory implementation of the link registry.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{InsertOutcome, LinkRegistry};

/// Process-local link registry guarded by a reader/writer lock.
///
/// Contents live for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct InMemoryLinkRegistry {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl InMemoryLinkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry pre-populated with `links`. Later duplicates of a
    /// key are ignored.
    pub fn with_links<I: IntoIterator<Item = ShortLink>>(links: I) -> Self {
        let registry = Self::new();
        for link in links {
            registry.insert(link);
        }
        registry
    }

    // A writer that panicked cannot leave the map half-updated (single
    // `insert` call), so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ShortLink>> {
        self.links.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ShortLink>> {
        self.links.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LinkRegistry for InMemoryLinkRegistry {
    fn exists(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    fn get(&self, key: &str) -> Option<ShortLink> {
        self.read().get(key).cloned()
    }

    fn insert(&self, link: ShortLink) -> InsertOutcome {
        match self.write().entry(link.id.clone()) {
            Entry::Occupied(_) => {
                debug!("Registry key {} already bound", link.id);
                InsertOutcome::AlreadyExists
            }
            Entry::Vacant(slot) => {
                slot.insert(link);
                InsertOutcome::Inserted
            }
        }
    }

    fn list(&self) -> Vec<ShortLink> {
        self.read().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    fn link(id: &str, url: &str) -> ShortLink {
        ShortLink::new(id.to_string(), url.to_string(), "http://localhost:8080")
    }

    #[test]
    fn test_insert_and_get() {
        let registry = InMemoryLinkRegistry::new();
        assert!(registry.is_empty());

        let outcome = registry.insert(link("promo", "https://example.com"));
        assert_eq!(outcome, InsertOutcome::Inserted);

        assert!(registry.exists("promo"));
        let found = registry.get("promo").unwrap();
        assert_eq!(found.original_url, "https://example.com");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_key() {
        let registry = InMemoryLinkRegistry::new();
        assert!(!registry.exists("nope"));
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_existing_key_is_never_rebound() {
        let registry = InMemoryLinkRegistry::new();
        registry.insert(link("promo", "https://first.com"));

        let outcome = registry.insert(link("promo", "https://second.com"));

        assert_eq!(outcome, InsertOutcome::AlreadyExists);
        assert_eq!(
            registry.get("promo").unwrap().original_url,
            "https://first.com"
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_list_snapshot() {
        let registry = InMemoryLinkRegistry::with_links([
            link("one", "https://one.com"),
            link("two", "https://two.com"),
            link("one", "https://dup.com"),
        ]);

        let mut ids: Vec<String> = registry.list().into_iter().map(|l| l.id).collect();
        ids.sort();
        assert_eq!(ids, ["one", "two"]);
    }

    #[test]
    fn test_concurrent_inserts_of_same_key_have_one_winner() {
        const THREADS: usize = 16;
        let registry = Arc::new(InMemoryLinkRegistry::new());
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.insert(link("contested", &format!("https://{i}.example.com")))
                })
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|o| *o == InsertOutcome::Inserted)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let registry = Arc::new(InMemoryLinkRegistry::new());

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for n in 0..50 {
                        registry.insert(link(&format!("w{w}-{n}"), "https://example.com"));
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for n in 0..50 {
                        let _ = registry.exists(&format!("w0-{n}"));
                        let _ = registry.list();
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 200);
    }
}
