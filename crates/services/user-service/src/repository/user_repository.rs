//! User repository with an in-memory store.

use std::collections::HashMap;

use domain::{DomainError, DomainResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Usernames are unique keys. `insert` and `remove` enforce that themselves,
/// so a repository never holds two users with the same name.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    fn find_by_username(&self, username: &str) -> Option<User>;

    /// Check whether a username is taken
    fn exists(&self, username: &str) -> bool;

    /// Check a password against the stored one without copying the record
    fn verify_password(&self, username: &str, password: &str) -> bool;

    /// Store a new user; fails if the username is taken
    fn insert(&mut self, user: User) -> DomainResult<()>;

    /// Delete a user by username, returning the removed record
    fn remove(&mut self, username: &str) -> DomainResult<User>;

    /// List all users, ordered by username
    fn list(&self) -> Vec<User>;

    /// Number of stored users
    fn count(&self) -> usize;
}

/// In-memory implementation of UserRepository keyed by username
#[derive(Debug, Default, Clone)]
pub struct UserStore {
    users: HashMap<String, User>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for UserStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }

    fn exists(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn verify_password(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|user| user.verify_password(password))
    }

    fn insert(&mut self, user: User) -> DomainResult<()> {
        if self.users.contains_key(&user.username) {
            return Err(DomainError::duplicate_user(user.username));
        }

        self.users.insert(user.username.clone(), user);
        Ok(())
    }

    fn remove(&mut self, username: &str) -> DomainResult<User> {
        self.users
            .remove(username)
            .ok_or_else(|| DomainError::user_not_found(username))
    }

    fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        users
    }

    fn count(&self) -> usize {
        self.users.len()
    }
}
