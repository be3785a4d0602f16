//! Reading records, rules and catalogs from disk

use anyhow::{Context, Result, bail};
use roster_filter::coerce::value_type_name;
use roster_filter::{BUILTIN_CATALOGS, FieldCatalog, FilterRuleSet};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Load a JSON array of records.
pub fn records(path: &Path) -> Result<Vec<Value>> {
    let text = read_text(path)?;
    let parsed: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    match parsed {
        Value::Array(records) => Ok(records),
        other => bail!(
            "{} must hold an array of records, found {}",
            path.display(),
            value_type_name(Some(&other))
        ),
    }
}

/// Load a JSON array of rules.
pub fn rules(path: &Path) -> Result<FilterRuleSet> {
    let text = read_text(path)?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} does not hold an array of rules", path.display()))
}

/// A built-in catalog by name, or a catalog JSON file.
pub fn catalog(name_or_path: &str) -> Result<FieldCatalog> {
    if let Some(catalog) = FieldCatalog::builtin(name_or_path) {
        return Ok(catalog);
    }
    let path = Path::new(name_or_path);
    if !path.is_file() {
        bail!(
            "unknown catalog '{name_or_path}' (built-in catalogs: {})",
            BUILTIN_CATALOGS.join(", ")
        );
    }
    let text = read_text(path)?;
    FieldCatalog::from_json_str(&text)
        .with_context(|| format!("{} is not a valid field catalog", path.display()))
}
