//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Create configuration from environment variables
    ///
    /// The level comes from `ROSTER_LOG`, falling back to `RUST_LOG`;
    /// the format from `ROSTER_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = var("ROSTER_LOG").or_else(|| var("RUST_LOG")) {
            config.level = level;
        }

        // Unknown names fall back to compact rather than failing startup.
        if let Some(format) = var("ROSTER_LOG_FORMAT") {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        config.display.apply_vars(&var);
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Quiet configuration for command-line tools (warnings only, no color)
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            level: "warn".to_string(),
            display: DisplayConfig {
                colors: false,
                time: false,
                source: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
