//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Default service name used in log output
pub const DEFAULT_SERVICE_NAME: &str = "workshop";

/// Default log filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base configuration shared by every component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level or `EnvFilter` directive
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` if present. `RUST_LOG` takes precedence over `LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: lookup("RUST_LOG")
                .or_else(|| lookup("LOG_LEVEL"))
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Override the service name.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }
}
