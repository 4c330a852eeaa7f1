//! Workshop - user registry and calculator wired together.
//!
//! The two components stay independent; this crate only composes them so a
//! caller can authenticate and then compute.
//!
//! ```
//! use workshop::Workshop;
//!
//! let mut workshop = Workshop::new();
//! workshop.register("new_user", "password123").unwrap();
//! assert!(workshop.login("new_user", "password123"));
//!
//! let sum = workshop.calculator().add(100, 50);
//! assert_eq!(sum, 150);
//! ```

use calculator_service_lib::Calculator;
use common::{telemetry, AppResult, ServiceConfig};
use domain::{DomainError, Number, Operation};
use tracing::warn;
use user_service_lib::UserRegistry;

pub use calculator_service_lib as calculator;
pub use user_service_lib as users;

/// Owns one user registry and one calculator.
#[derive(Debug, Default, Clone)]
pub struct Workshop {
    users: UserRegistry,
    calculator: Calculator,
}

impl Workshop {
    /// Create a workshop with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from the environment, install tracing, create a workshop
    pub fn bootstrap() -> Self {
        let config = ServiceConfig::from_env();
        telemetry::init_tracing(&config);
        tracing::debug!(?config, "Workshop configured");
        Self::new()
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut UserRegistry {
        &mut self.users
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Register a new user
    pub fn register(&mut self, username: &str, password: &str) -> AppResult<()> {
        Ok(self.users.add(username, password)?)
    }

    /// Check credentials (never fails)
    pub fn login(&self, username: &str, password: &str) -> bool {
        self.users.authenticate(username, password)
    }

    /// Remove a registered user
    pub fn unregister(&mut self, username: &str) -> AppResult<()> {
        Ok(self.users.remove(username)?)
    }

    /// Compute on behalf of a user, refusing callers whose credentials fail.
    ///
    /// # Errors
    /// `InvalidCredentials` for unknown users or wrong passwords, and
    /// `DivisionByZero` from the calculator.
    pub fn calculate(
        &self,
        username: &str,
        password: &str,
        op: Operation,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> AppResult<Number> {
        if !self.login(username, password) {
            warn!(username, %op, "Refused calculation for unauthenticated user");
            return Err(DomainError::InvalidCredentials.into());
        }

        Ok(self.calculator.apply(op, a, b)?)
    }

    /// Like [`Workshop::calculate`] with the operation given by name or symbol.
    pub fn evaluate(
        &self,
        username: &str,
        password: &str,
        op: &str,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> AppResult<Number> {
        let op: Operation = op.parse()?;
        self.calculate(username, password, op, a, b)
    }
}

#[cfg(test)]
mod tests {
    use common::AppError;

    use super::*;

    #[test]
    fn test_register_duplicate_maps_to_app_error() {
        let mut workshop = Workshop::new();
        workshop.register("bob", "pw").unwrap();

        let err = workshop.register("bob", "pw2").unwrap_err();

        assert_eq!(err.code(), "DUPLICATE_USER");
    }

    #[test]
    fn test_unregister_missing() {
        let mut workshop = Workshop::new();

        let err = workshop.unregister("ghost").unwrap_err();

        assert_eq!(err, AppError::from(DomainError::user_not_found("ghost")));
    }

    #[test]
    fn test_evaluate_rejects_unknown_operation() {
        let mut workshop = Workshop::new();
        workshop.register("amy", "pw").unwrap();

        let err = workshop.evaluate("amy", "pw", "pow", 2, 8).unwrap_err();

        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_users_mut_shares_registry() {
        let mut workshop = Workshop::new();
        workshop.users_mut().add("kim", "pw").unwrap();

        assert!(workshop.login("kim", "pw"));
        assert_eq!(workshop.users().len(), 1);
    }
}
