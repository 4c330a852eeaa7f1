//! Thread-safe handle to a user registry.

use std::sync::Arc;

use domain::{DomainResult, User};
use parking_lot::Mutex;

use super::UserRegistry;
use crate::repository::{UserRepository, UserStore};

/// Cloneable handle sharing one registry across threads.
///
/// Every operation holds the lock for its whole duration, so a concurrent
/// `add` of the same username lets exactly one caller through.
#[derive(Debug)]
pub struct SharedUserRegistry<R: UserRepository = UserStore> {
    inner: Arc<Mutex<UserRegistry<R>>>,
}

impl<R: UserRepository> Clone for SharedUserRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedUserRegistry<UserStore> {
    /// Create an empty shared in-memory registry
    pub fn new() -> Self {
        Self::from_registry(UserRegistry::new())
    }
}

impl Default for SharedUserRegistry<UserStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: UserRepository> SharedUserRegistry<R> {
    /// Wrap an existing registry
    pub fn from_registry(registry: UserRegistry<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn add(&self, username: &str, password: &str) -> DomainResult<()> {
        self.inner.lock().add(username, password)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.inner.lock().authenticate(username, password)
    }

    pub fn remove(&self, username: &str) -> DomainResult<()> {
        self.inner.lock().remove(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.inner.lock().contains(username)
    }

    pub fn get(&self, username: &str) -> Option<User> {
        self.inner.lock().get(username)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Run a closure with exclusive access to the registry
    pub fn with_registry<T>(&self, f: impl FnOnce(&mut UserRegistry<R>) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use domain::DomainError;

    use super::*;

    #[test]
    fn test_clones_share_state() {
        let registry = SharedUserRegistry::new();
        let other = registry.clone();

        registry.add("alice", "pw").unwrap();

        assert!(other.authenticate("alice", "pw"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_concurrent_duplicate_add_admits_one() {
        let registry = SharedUserRegistry::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = registry.clone();
                thread::spawn(move || registry.add("racer", &format!("pw{}", i)))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();

        assert_eq!(successes, 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == DomainError::duplicate_user("racer")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_with_registry_batches_under_one_lock() {
        let registry = SharedUserRegistry::new();

        let added = registry.with_registry(|r| {
            r.add("a", "1").unwrap();
            r.add("b", "2").unwrap();
            r.len()
        });

        assert_eq!(added, 2);
        assert!(registry.contains("b"));
    }
}
