//! Command-line arguments

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use roster_log::Format;
use std::path::PathBuf;

/// Filter provider, credentialing and upload records with field rules
#[derive(Debug, Parser)]
#[command(name = "roster", version, about, propagate_version = true)]
pub struct Cli {
    /// Settings file (defaults to ./roster.toml when present)
    #[arg(long, global = true, env = "ROSTER_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "warn,roster_filter=debug"
    #[arg(long, global = true, value_name = "DIRECTIVE")]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<Format>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the records that satisfy every rule
    Filter(FilterArgs),
    /// Check rules against a field catalog
    Validate(ValidateArgs),
    /// List the fields of a catalog and their operators
    Fields(FieldsArgs),
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// JSON array of records ("-" for stdin)
    #[arg(long, value_name = "FILE")]
    pub records: PathBuf,

    /// JSON array of rules
    #[arg(long, value_name = "FILE")]
    pub rules: PathBuf,

    /// Built-in catalog name or catalog JSON file, used with --strict
    #[arg(long, value_name = "CATALOG")]
    pub catalog: Option<String>,

    /// Validate the rules first and fail on any issue
    #[arg(long)]
    pub strict: bool,

    /// Reference instant for inLast rules (RFC 3339)
    #[arg(long, value_name = "INSTANT")]
    pub now: Option<DateTime<Utc>>,

    /// Pretty-print the matching records
    #[arg(long)]
    pub pretty: bool,

    /// Print only the number of matching records
    #[arg(long, conflicts_with = "pretty")]
    pub count: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// JSON array of rules
    #[arg(long, value_name = "FILE")]
    pub rules: PathBuf,

    /// Built-in catalog name or catalog JSON file
    #[arg(long, value_name = "CATALOG")]
    pub catalog: Option<String>,
}

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Built-in catalog name or catalog JSON file
    pub catalog: Option<String>,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}
