//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: Password,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identifier
    pub fn new(username: impl Into<String>, password: impl Into<Password>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }

    /// Check a candidate password against the stored one
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }
}
