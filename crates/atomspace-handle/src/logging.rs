//! # Logging
//!
//! Installs the process-wide `tracing` subscriber for hosts embedding the
//! handle layer. The layer itself only emits events; it never installs a
//! subscriber on its own.
//!
//! Filter precedence: `log_filter` from configuration, then `RUST_LOG`,
//! then [`DEFAULT_FILTER`].

use crate::config::{AtomSpaceConfig, LogFormat};
use crate::types::AtomSpaceError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither configuration nor `RUST_LOG` provides one.
pub const DEFAULT_FILTER: &str = "atomspace_handle=info";

/// Install the global subscriber described by `config`.
///
/// Fails (without panicking) if the filter is malformed or a global
/// subscriber is already installed.
pub fn init(config: &AtomSpaceConfig) -> Result<(), AtomSpaceError> {
    let filter = build_filter(config.log_filter.as_deref())?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };
    installed.map_err(|e| AtomSpaceError::Logging(e.to_string()))
}

fn build_filter(directives: Option<&str>) -> Result<EnvFilter, AtomSpaceError> {
    match directives {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| AtomSpaceError::Logging(e.to_string()))
        }
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())),
    }
}

// =============================================================================
// TESTS
// =============================================================================
