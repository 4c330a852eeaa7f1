//! Arithmetic operations supported by the calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{OP_ADD, OP_DIVIDE, OP_MULTIPLY, OP_SUBTRACT};
use crate::error::DomainError;

/// Binary arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => OP_ADD,
            Operation::Subtract => OP_SUBTRACT,
            Operation::Multiply => OP_MULTIPLY,
            Operation::Divide => OP_DIVIDE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            OP_ADD | "+" => Ok(Operation::Add),
            OP_SUBTRACT | "sub" | "-" => Ok(Operation::Subtract),
            OP_MULTIPLY | "mul" | "*" => Ok(Operation::Multiply),
            OP_DIVIDE | "div" | "/" => Ok(Operation::Divide),
            other => Err(DomainError::validation(format!(
                "Unknown operation '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_symbols() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("-".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("MUL".parse::<Operation>().unwrap(), Operation::Multiply);
        assert_eq!(" div ".parse::<Operation>().unwrap(), Operation::Divide);
    }

    #[test]
    fn test_parse_unknown_is_validation_error() {
        let err = "pow".parse::<Operation>().unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_display_parses_back() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }
}
