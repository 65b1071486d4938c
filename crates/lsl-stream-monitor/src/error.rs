//! # Error Types
//!
//! Errors raised while discovering LSL streams or loading configuration.
//! Only the discovery class is fatal to a monitor run; "no streams found"
//! and "no HR/RR stream found" are ordinary outcomes, not errors.

use thiserror::Error;

/// Convenient Result alias for monitor operations.
pub type MonitorResult<T> = std::result::Result<T, MonitorError>;

/// All errors that can occur while running the stream monitor.
#[derive(Error, Debug)]
pub enum MonitorError {
    // ─── Discovery ──────────────────────────────────────────────────
    /// The LSL discovery library is not available in this build or on this host.
    #[error("LSL discovery unavailable: {reason}")]
    DiscoveryUnavailable { reason: String },

    /// The LSL resolve call itself failed (network or library misconfiguration).
    #[error("LSL stream discovery failed: {reason}")]
    DiscoveryFailed { reason: String },

    /// Wait time handed to discovery is negative, NaN or infinite.
    #[error("Invalid discovery wait time {seconds}s: must be a finite, non-negative number")]
    InvalidWaitTime { seconds: f64 },

    // ─── Config ─────────────────────────────────────────────────────
    /// Configuration file error (missing, malformed, or invalid values).
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    // ─── I/O ────────────────────────────────────────────────────────
    /// Console or filesystem I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MonitorError {
    /// Returns `true` for errors coming from the discovery call.
    pub fn is_discovery_error(&self) -> bool {
        matches!(
            self,
            MonitorError::DiscoveryUnavailable { .. } | MonitorError::DiscoveryFailed { .. }
        )
    }
}

impl From<toml::de::Error> for MonitorError {
    fn from(err: toml::de::Error) -> Self {
        MonitorError::ConfigError {
            reason: err.to_string(),
        }
    }
}
