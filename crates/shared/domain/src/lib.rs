//! Domain layer - Core entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Both the user registry and the calculator build on the types defined here.

pub mod constants;
pub mod error;
pub mod number;
pub mod operation;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use number::Number;
pub use operation::Operation;
pub use password::Password;
pub use user::User;
