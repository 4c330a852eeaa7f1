//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified application error handling
//! - Configuration structures
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::ServiceConfig;
pub use error::{AppError, AppResult};
