//! User Service Library
//!
//! In-memory user registry: add, authenticate and remove users.
//! Passwords are stored verbatim and compared exactly.

pub mod repository;
pub mod service;

pub use repository::{UserRepository, UserStore};
pub use service::{SharedUserRegistry, UserRegistry};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
