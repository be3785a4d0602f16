//! Layered settings: defaults, then `roster.toml`, then `ROSTER_*`
//! environment, then command-line flags.

use chrono::{DateTime, Utc};
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use roster_filter::FilterConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};

/// Settings file looked up in the working directory when `--config` is absent
pub const DEFAULT_FILE: &str = "roster.toml";

/// Variables whose names do not split into their settings key: the
/// `roster-log` variables and the camelCase `filter.*` keys.
const MAPPED_VARS: [(&str, &str); 7] = [
    ("ROSTER_LOG", "log.level"),
    ("ROSTER_LOG_FORMAT", "log.format"),
    ("ROSTER_LOG_TIME", "log.display.time"),
    ("ROSTER_LOG_SOURCE", "log.display.source"),
    ("ROSTER_LOG_COLORS", "log.display.colors"),
    ("ROSTER_FILTER__REFERENCETIME", "filter.referenceTime"),
    ("ROSTER_FILTER__UNKNOWNOPERATOR", "filter.unknownOperator"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog used when a command does not name one
    pub catalog: String,
    pub strict: bool,
    pub pretty: bool,
    pub log: roster_log::Config,
    pub filter: FilterConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: "providers".to_string(),
            strict: false,
            pretty: false,
            log: roster_log::Config::quiet(),
            filter: FilterConfig::default(),
        }
    }
}

/// Flag values that override lower layers when given.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pretty: Option<bool>,
    log: LogOverrides,
    filter: FilterOverrides,
}

#[derive(Debug, Default, Serialize)]
struct LogOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<roster_log::Format>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct FilterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    reference_time: Option<DateTime<Utc>>,
}

impl Overrides {
    fn from_cli(cli: &Cli) -> Self {
        let mut overrides = Self {
            log: LogOverrides {
                level: cli.log_level.clone(),
                format: cli.log_format,
            },
            ..Self::default()
        };
        // Boolean flags only ever switch a setting on.
        match &cli.command {
            Command::Filter(args) => {
                overrides.catalog.clone_from(&args.catalog);
                overrides.strict = args.strict.then_some(true);
                overrides.pretty = args.pretty.then_some(true);
                overrides.filter.reference_time = args.now;
            }
            Command::Validate(args) => overrides.catalog.clone_from(&args.catalog),
            Command::Fields(args) => overrides.catalog.clone_from(&args.catalog),
        }
        overrides
    }
}

impl Settings {
    /// Resolve settings for `cli`.
    pub fn load(cli: &Cli) -> figment::Result<Self> {
        Self::figment(cli.config.as_deref())
            .merge(Serialized::defaults(Overrides::from_cli(cli)))
            .extract()
    }

    /// Every layer below the command line.
    pub fn figment(file: Option<&Path>) -> Figment {
        let file = file.map_or_else(|| PathBuf::from(DEFAULT_FILE), Path::to_path_buf);
        let mut figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(
                Env::prefixed("ROSTER_")
                    .filter(|key| {
                        let key = key.as_str();
                        !key.eq_ignore_ascii_case("config")
                            && !MAPPED_VARS.iter().any(|(var, _)| {
                                var.strip_prefix("ROSTER_")
                                    .is_some_and(|name| key.eq_ignore_ascii_case(name))
                            })
                    })
                    .split("__"),
            );
        for (var, key) in MAPPED_VARS {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }
        figment
    }
}
