//! Error types for the customer API crate.

use thiserror::Error;

/// Errors that can occur while configuring or running the server.
///
/// Request handling itself cannot fail; these are all process-level.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to bind or serve.
    #[error("failed to start server: {0}")]
    StartupFailed(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
