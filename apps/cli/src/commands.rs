//! Subcommand handlers
//!
//! Each handler writes its result to `out` so tests can capture it.

use anyhow::{Context, Result, bail};
use roster_filter::{FieldCatalog, FilterEngine, FilterError, validate_rules};
use std::io::Write;

use crate::cli::{FieldsArgs, FilterArgs, ValidateArgs};
use crate::input;
use crate::settings::Settings;

pub fn filter(args: &FilterArgs, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let rules = input::rules(&args.rules)?;
    if settings.strict {
        let catalog = input::catalog(&settings.catalog)?;
        if let Err(issues) = validate_rules(&catalog, rules.as_slice()) {
            bail!(
                "{} of {} rules failed validation against '{}':\n{}",
                issues.len(),
                rules.len(),
                settings.catalog,
                render_issues(&issues)
            );
        }
    }

    let records = input::records(&args.records)?;
    let engine = FilterEngine::new(settings.filter.clone());
    let matched = engine.apply(&records, rules.as_slice());
    tracing::info!(
        records = records.len(),
        matched = matched.len(),
        "filtered records"
    );

    if args.count {
        writeln!(out, "{}", matched.len())?;
    } else if settings.pretty {
        serde_json::to_writer_pretty(&mut *out, &matched).context("failed to write records")?;
        writeln!(out)?;
    } else {
        serde_json::to_writer(&mut *out, &matched).context("failed to write records")?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn validate(args: &ValidateArgs, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let rules = input::rules(&args.rules)?;
    let catalog = input::catalog(&settings.catalog)?;
    match validate_rules(&catalog, rules.as_slice()) {
        Ok(()) => {
            let active = rules.active().count();
            writeln!(out, "{active} active rules are valid for '{}'", settings.catalog)?;
            Ok(())
        }
        Err(issues) => {
            writeln!(out, "{}", render_issues(&issues))?;
            bail!("{} invalid rules", issues.len())
        }
    }
}

pub fn fields(args: &FieldsArgs, settings: &Settings, out: &mut impl Write) -> Result<()> {
    let catalog = input::catalog(&settings.catalog)?;
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &catalog).context("failed to write catalog")?;
        writeln!(out)?;
        return Ok(());
    }
    write_table(&catalog, out)
}

fn write_table(catalog: &FieldCatalog, out: &mut impl Write) -> Result<()> {
    let key_width = catalog.iter().map(|f| f.key.len()).max().unwrap_or(0);
    let label_width = catalog.iter().map(|f| f.label.len()).max().unwrap_or(0);
    for field in catalog {
        let operators: Vec<&str> = field.operators().iter().map(|op| op.as_str()).collect();
        writeln!(
            out,
            "{:key_width$}  {:label_width$}  {:7}  {}",
            field.key,
            field.label,
            field.field_type.as_str(),
            operators.join(", ")
        )?;
    }
    Ok(())
}

fn render_issues(issues: &[FilterError]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
