//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ServiceConfig, DEFAULT_LOG_LEVEL};

/// Install the global tracing subscriber.
///
/// Returns `false` if a subscriber was already installed, so repeated calls
/// from tests are harmless.
pub fn init_tracing(config: &ServiceConfig) -> bool {
    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(service = %config.service_name, "Tracing initialized");
    }

    installed
}
