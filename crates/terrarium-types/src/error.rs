//! Error types for the terrarium framework.
//!
//! [`TerrariumError`] covers the fatal, startup-time failure modes:
//! configuration problems and registry misconfiguration. Per-command
//! failures are never errors at this level -- they are normalized into
//! [`CommandResult`](crate::CommandResult) values at the environment
//! boundary and stay in-band.

use thiserror::Error;

/// Top-level error type for the terrarium framework.
///
/// Every variant here is a process-start concern. Once the registry is
/// built and routing begins, no fatal path remains inside command handling.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TerrariumError {
    /// Configuration is malformed or semantically invalid, including a
    /// missing required parameter (wallet address, API key).
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Two environments were registered under the same name.
    #[error("duplicate environment: {name}")]
    DuplicateEnvironment {
        /// The name that was registered twice.
        name: String,
    },

    /// An environment name does not fit the routing grammar
    /// (single whitespace-free token).
    #[error("invalid environment name: {name:?}")]
    InvalidEnvironmentName {
        /// The offending name.
        name: String,
    },

    /// Underlying I/O error (config file reads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TerrariumError>;
