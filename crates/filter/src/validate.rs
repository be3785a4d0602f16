//! Strict checking of rules against a field catalog.
//!
//! Filtering tolerates anything; this is for surfacing mistakes while a
//! rule list is being built or loaded. Inert rules are never reported.

use serde_json::Value;

use crate::coerce;
use crate::date::{self, DurationUnit};
use crate::error::{FilterError, FilterResult};
use crate::field::{FieldCatalog, FieldDescriptor, FieldType};
use crate::operator::Operator;
use crate::rule::FilterRule;

/// Check one rule, reporting its first problem.
pub fn validate_rule(catalog: &FieldCatalog, rule: &FilterRule) -> FilterResult<()> {
    if rule.is_inert() {
        return Ok(());
    }
    let rule_id = || rule.id.clone();

    let field = catalog
        .get(&rule.field)
        .ok_or_else(|| FilterError::UnknownField {
            rule: rule_id(),
            field: rule.field.clone(),
        })?;

    let operator = rule
        .parsed_operator()
        .map_err(|_| FilterError::UnknownOperator {
            rule: rule_id(),
            operator: rule.operator.clone(),
        })?;

    if !field.field_type.allows(operator) {
        return Err(FilterError::OperatorNotAllowed {
            rule: rule_id(),
            field: field.key.clone(),
            operator,
            field_type: field.field_type,
        });
    }

    let value = rule.value.as_ref();
    if operator.takes_value() && is_blank(value) {
        return Err(FilterError::MissingValue {
            rule: rule_id(),
            operator,
        });
    }

    let second = rule.second_value.as_ref();
    if operator.takes_second_value() && is_blank(second) {
        return Err(FilterError::MissingSecondValue {
            rule: rule_id(),
            operator,
        });
    }

    if operator == Operator::InLast {
        if date::parse_count(value).is_none() {
            return Err(FilterError::InvalidCount {
                rule: rule_id(),
                count: coerce::to_text(value).into_owned(),
            });
        }
        if DurationUnit::from_value(second).is_none() {
            return Err(FilterError::InvalidUnit {
                rule: rule_id(),
                unit: coerce::to_text(second).into_owned(),
            });
        }
    }

    if field.field_type == FieldType::Select {
        check_options(field, operator, value, &rule.id)?;
    }
    Ok(())
}

/// Check every rule, collecting one problem per offending rule.
pub fn validate_rules(catalog: &FieldCatalog, rules: &[FilterRule]) -> Result<(), Vec<FilterError>> {
    let issues: Vec<FilterError> = rules
        .iter()
        .filter_map(|rule| validate_rule(catalog, rule).err())
        .collect();
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Array(items)) => items.is_empty(),
        other => coerce::is_empty(other),
    }
}

fn check_options(
    field: &FieldDescriptor,
    operator: Operator,
    value: Option<&Value>,
    rule: &str,
) -> FilterResult<()> {
    if field.options.is_empty() || !matches!(
        operator,
        Operator::Equals | Operator::NotEquals | Operator::In | Operator::NotIn
    ) {
        return Ok(());
    }
    let chosen: Vec<&Value> = match value {
        Some(Value::Array(items)) if operator.takes_list() => items.iter().collect(),
        Some(single) => vec![single],
        None => Vec::new(),
    };
    for candidate in chosen {
        let known = field
            .options
            .iter()
            .any(|option| coerce::loose_eq(Some(&option.value), Some(candidate)));
        if !known {
            return Err(FilterError::UnknownOption {
                rule: rule.to_string(),
                field: field.key.clone(),
                value: coerce::to_text(Some(candidate)).into_owned(),
            });
        }
    }
    Ok(())
}
