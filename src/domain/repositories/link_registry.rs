//! Registry trait for short link storage.

use crate::domain::entities::ShortLink;

/// Outcome of an insertion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The key was already bound; the existing link is left untouched.
    AlreadyExists,
}

/// Concurrent slug → [`ShortLink`] store.
///
/// A key, once present, is never rebound to a different link. Reads may run
/// concurrently with each other; inserts are exclusive.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRegistry`] - `RwLock`-guarded map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRegistry: Send + Sync {
    /// Returns true if `key` is bound to a link.
    fn exists(&self, key: &str) -> bool;

    /// Looks up the link bound to `key`.
    fn get(&self, key: &str) -> Option<ShortLink>;

    /// Binds `link.id` to `link` unless the key is already present.
    ///
    /// The presence check and the write happen under one exclusive lock, so
    /// two callers racing on the same key get exactly one
    /// [`InsertOutcome::Inserted`].
    fn insert(&self, link: ShortLink) -> InsertOutcome;

    /// Snapshot of all links, in no particular order.
    fn list(&self) -> Vec<ShortLink>;

    /// Number of registered links.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
