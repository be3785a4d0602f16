//! `roster`: filter provider records from the command line.

mod cli;
mod commands;
mod input;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli).context("failed to load settings")?;
    let _guard = roster_log::init_with(settings.log.clone())?;
    tracing::debug!(?settings, "resolved settings");

    let mut out = std::io::stdout().lock();
    match &cli.command {
        Command::Filter(args) => commands::filter(args, &settings, &mut out),
        Command::Validate(args) => commands::validate(args, &settings, &mut out),
        Command::Fields(args) => commands::fields(args, &settings, &mut out),
    }
}
