//! User registry - add, authenticate and remove users.
//!
//! The registry is an explicit value owned by its caller. There is no global
//! user table.

use domain::{DomainError, DomainResult, User};
use tracing::{debug, info, warn};

use crate::repository::{UserRepository, UserStore};

/// Registry of users keyed by username.
///
/// Passwords are stored as given and compared with exact string equality.
#[derive(Debug, Default, Clone)]
pub struct UserRegistry<R: UserRepository = UserStore> {
    repo: R,
}

impl UserRegistry<UserStore> {
    /// Create an empty in-memory registry
    pub fn new() -> Self {
        Self::with_repository(UserStore::new())
    }
}

impl<R: UserRepository> UserRegistry<R> {
    /// Create a registry on top of an existing repository
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new user.
    ///
    /// # Errors
    /// `DuplicateUser` if the username is already registered. The stored
    /// password is left untouched in that case.
    pub fn add(&mut self, username: &str, password: &str) -> DomainResult<()> {
        if self.repo.exists(username) {
            warn!(username, "Rejected duplicate user");
            return Err(DomainError::duplicate_user(username));
        }

        self.repo.insert(User::new(username, password))?;

        info!(username, "User added");
        Ok(())
    }

    /// Check a username/password pair.
    ///
    /// Unknown usernames yield `false`; this never fails.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let authenticated = self.repo.verify_password(username, password);

        debug!(username, authenticated, "Authentication attempt");
        authenticated
    }

    /// Remove a registered user.
    ///
    /// # Errors
    /// `UserNotFound` if the username is not registered.
    pub fn remove(&mut self, username: &str) -> DomainResult<()> {
        match self.repo.remove(username) {
            Ok(_) => {
                info!(username, "User removed");
                Ok(())
            }
            Err(e) => {
                warn!(username, "Attempted to remove unknown user");
                Err(e)
            }
        }
    }

    /// Check whether a username is registered
    pub fn contains(&self, username: &str) -> bool {
        self.repo.exists(username)
    }

    /// Look up a registered user
    pub fn get(&self, username: &str) -> Option<User> {
        self.repo.find_by_username(username)
    }

    /// Registered usernames in sorted order
    pub fn usernames(&self) -> Vec<String> {
        self.repo.list().into_iter().map(|u| u.username).collect()
    }

    pub fn len(&self) -> usize {
        self.repo.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
