//! Calculator domain service.

mod calculator;

pub use calculator::Calculator;
