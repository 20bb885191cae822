//! Runtime configuration for boards and their task API round-trips.
//!
//! # Examples
//!
//! ```
//! use taskdeck::config::{BoardConfig, BusyPolicy};
//!
//! let config = BoardConfig::default();
//! assert_eq!(config.page_size, 10);
//! assert_eq!(config.busy_policy, BusyPolicy::Reject);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// What to do when a mutation targets an item whose previous request is
/// still in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyPolicy {
    /// Fail the second request with `ItemBusy`.
    #[default]
    Reject,
    /// Wait for the first request to settle, then run.
    Queue,
}

/// Board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Items per list page.
    pub page_size: usize,
    /// Upper bound on a single task API call, in milliseconds.
    pub collaborator_timeout_ms: u64,
    /// Handling of overlapping mutations on one item.
    pub busy_policy: BusyPolicy,
    /// Default `tracing` filter directive.
    pub log_filter: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            collaborator_timeout_ms: 10_000,
            busy_policy: BusyPolicy::Reject,
            log_filter: "info".to_owned(),
        }
    }
}

impl BoardConfig {
    /// Creates a configuration suited to tests: short timeouts and small
    /// pages.
    #[must_use]
    pub fn fast() -> Self {
        Self {
            page_size: 5,
            collaborator_timeout_ms: 250,
            log_filter: "debug".to_owned(),
            ..Self::default()
        }
    }

    /// Parses and validates a JSON document. Missing keys take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or a validation
    /// error for out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] or [`ConfigError::ZeroTimeout`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.collaborator_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Returns the task API timeout.
    #[must_use]
    pub const fn collaborator_timeout(&self) -> Duration {
        Duration::from_millis(self.collaborator_timeout_ms)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The document could not be decoded.
    #[error("invalid board configuration: {0}")]
    Parse(String),
    /// Pages must hold at least one item.
    #[error("page_size must be at least 1")]
    ZeroPageSize,
    /// A zero timeout would fail every call.
    #[error("collaborator_timeout_ms must be at least 1")]
    ZeroTimeout,
}
