//! Calculator Service Library
//!
//! Stateless arithmetic over integer and floating operands.

pub mod service;

pub use service::Calculator;
