//! Calculator service
//!
//! Every operation is a pure function of its operands. Only division can fail.

use domain::{DomainError, DomainResult, Number, Operation};
use tracing::{debug, warn};

/// Stateless arithmetic service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers.
    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "performing addition");
        a + b
    }

    /// Subtract `b` from `a`.
    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "performing subtraction");
        a - b
    }

    /// Multiply two numbers.
    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        debug!(%a, %b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`. The quotient is always floating.
    ///
    /// # Errors
    /// `DivisionByZero` when `b` is integer zero or floating `±0.0`.
    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> DomainResult<Number> {
        let (a, b) = (a.into(), b.into());
        if b.is_zero() {
            warn!(%a, "division by zero rejected");
            return Err(DomainError::DivisionByZero);
        }

        debug!(%a, %b, "performing division");
        Ok(Number::Float(a.as_f64() / b.as_f64()))
    }

    /// Apply an operation chosen at runtime.
    pub fn apply(
        &self,
        op: Operation,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> DomainResult<Number> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}
