//! Tracing subscriber installation.

use crate::config::BoardConfig;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "TASKDECK_LOG";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        /// Offending directive.
        directive: String,
        /// Parser error.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error(transparent)]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Picks the filter directive: `TASKDECK_LOG`, then `RUST_LOG`, then the
/// configured default.
#[must_use]
pub fn filter_directive(config: &BoardConfig) -> String {
    [LOG_ENV_VAR, "RUST_LOG"]
        .into_iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| config.log_filter.clone())
}

/// Builds an [`EnvFilter`] from a directive string.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the directive does not
/// parse.
pub fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
        directive: directive.to_owned(),
        source,
    })
}

/// Installs a formatted stderr subscriber as the global default.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a bad directive, or
/// [`TelemetryError::AlreadyInstalled`] when called twice.
pub fn init_tracing(config: &BoardConfig) -> Result<(), TelemetryError> {
    let directive = filter_directive(config);
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(build_filter(&directive)?)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(filter = %directive, "tracing initialised");
    Ok(())
}
