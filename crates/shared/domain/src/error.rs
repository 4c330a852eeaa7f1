//! Domain-level errors.
//!
//! These errors represent business rule violations in the registry and the
//! calculator. They are independent of how callers surface them.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A user with this name is already registered
    #[error("User '{0}' already exists")]
    DuplicateUser(String),

    /// No user with this name is registered
    #[error("User '{0}' does not exist")]
    UserNotFound(String),

    /// Divisor was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Username/password pair did not match a registered user
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Validation failed for an input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a duplicate user error
    pub fn duplicate_user(username: impl Into<String>) -> Self {
        DomainError::DuplicateUser(username.into())
    }

    /// Create a user not found error
    pub fn user_not_found(username: impl Into<String>) -> Self {
        DomainError::UserNotFound(username.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
