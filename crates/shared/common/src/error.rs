//! Unified application error.
//!
//! Wraps domain failures for the composed workshop. Every variant maps to a
//! stable error code.

use domain::DomainError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Business rule violations
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get error code for callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::DuplicateUser(_)) => "DUPLICATE_USER",
            AppError::Domain(DomainError::UserNotFound(_)) => "USER_NOT_FOUND",
            AppError::Domain(DomainError::DivisionByZero) => "DIVISION_BY_ZERO",
            AppError::Domain(DomainError::InvalidCredentials) => "INVALID_CREDENTIALS",
            AppError::Domain(DomainError::Validation(_)) => "VALIDATION_ERROR",
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            // Show the bare reason for validation failures
            AppError::Domain(DomainError::Validation(msg)) => msg.clone(),
            _ => self.to_string(),
        }
    }

    /// Domain failure behind this error
    pub fn as_domain(&self) -> &DomainError {
        match self {
            AppError::Domain(err) => err,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
