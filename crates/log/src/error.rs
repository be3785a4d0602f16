//! Error type for logger setup

use thiserror::Error;

/// Result alias for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing the global subscriber
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LogError {
    /// The level directive could not be parsed
    #[error("invalid log filter '{filter}': {reason}")]
    Filter {
        /// Directive as given
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A configuration value was rejected
    #[error("configuration error: {0}")]
    Config(String),

    /// A global subscriber was already installed
    #[error("failed to install logger: {0}")]
    Init(String),
}
