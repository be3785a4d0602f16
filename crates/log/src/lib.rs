//! # roster-log
//!
//! Logging setup shared by the roster crates.
//!
//! Libraries log through the re-exported `tracing` macros and never install
//! a subscriber; binaries call one of the `init` functions once at startup.
//!
//! ```rust,no_run
//! fn main() -> roster_log::LogResult<()> {
//!     let _guard = roster_log::auto_init()?;
//!     roster_log::info!(records = 120, "loaded providers");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, info_span, instrument, trace, warn};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Config, Format, LogResult, auto_init, debug, error, info, init, init_with, trace, warn,
    };
}

/// Pick a configuration from the environment and build profile, then install it
///
/// `ROSTER_LOG` or `RUST_LOG` selects [`Config::from_env`]; otherwise debug
/// builds get [`Config::development`] and release builds
/// [`Config::production`]. Returns a no-op guard if a subscriber is
/// already installed.
///
/// # Errors
///
/// Returns [`LogError::Filter`] if the level directive cannot be parsed
pub fn auto_init() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }

    if std::env::var_os("ROSTER_LOG").is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`]
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
///
/// # Errors
///
/// See [`LoggerBuilder::build`]
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
