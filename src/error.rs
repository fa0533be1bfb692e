//! Error types for the contagion monitor.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors surfaced by the monitor's fallible surface.
///
/// Most of the monitor deliberately does not error: invalid contacts are
/// silently dropped and every "no result" query condition is a uniform
/// `None`. What remains is configuration validation and an escape hatch.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catch-all for errors that do not fit other variants.
    #[error("{0}")]
    Other(String),
}
