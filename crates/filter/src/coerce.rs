//! Loose coercions used by the operator dispatch.
//!
//! Every function takes `Option<&Value>`: `None` is a field the record does
//! not have, which is distinct from an explicit `null`.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Get the type name of a value for diagnostics
pub fn value_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Extract f64 from Number, trying both f64 and i64 representations
#[inline]
pub fn number_as_f64(num: &Number) -> Option<f64> {
    num.as_f64().or_else(|| num.as_i64().map(|i| i as f64))
}

/// String form of a number: integral values print without a fraction.
pub fn number_to_text(num: &Number) -> String {
    if let Some(i) = num.as_i64() {
        return i.to_string();
    }
    if let Some(u) = num.as_u64() {
        return u.to_string();
    }
    match num.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        Some(f) => f.to_string(),
        None => num.to_string(),
    }
}

/// Coerce a value to its string form.
///
/// Absent fields become `"undefined"` and `null` becomes `"null"`, so text
/// operators applied to a missing field compare against those words.
pub fn to_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None => Cow::Borrowed("undefined"),
        Some(Value::Null) => Cow::Borrowed("null"),
        Some(Value::Bool(true)) => Cow::Borrowed("true"),
        Some(Value::Bool(false)) => Cow::Borrowed("false"),
        Some(Value::Number(n)) => Cow::Owned(number_to_text(n)),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Array(items)) => {
            let parts: Vec<Cow<'_, str>> = items
                .iter()
                .map(|item| match item {
                    Value::Null => Cow::Borrowed(""),
                    other => to_text(Some(other)),
                })
                .collect();
            Cow::Owned(parts.join(","))
        }
        Some(Value::Object(_)) => Cow::Borrowed("[object Object]"),
    }
}

/// Lowercased string form, the shape every text comparison works on.
pub fn to_folded_text(value: Option<&Value>) -> String {
    to_text(value).to_lowercase()
}

/// Coerce a value to a number. Anything without a numeric reading is NaN.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => number_as_f64(n).unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_number(s),
        Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
    }
}

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => trimmed
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .unwrap_or(f64::NAN),
    }
}

/// Whether the value is one of the empty forms: absent, `null` or `""`.
#[inline]
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Loose equality: booleans compare exactly, everything else compares by
/// case-folded string form.
pub fn loose_eq(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a == b,
        _ => to_folded_text(left) == to_folded_text(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_of_scalars() {
        assert_eq!(to_text(None), "undefined");
        assert_eq!(to_text(Some(&Value::Null)), "null");
        assert_eq!(to_text(Some(&json!(true))), "true");
        assert_eq!(to_text(Some(&json!(33))), "33");
        assert_eq!(to_text(Some(&json!(33.0))), "33");
        assert_eq!(to_text(Some(&json!(1.5))), "1.5");
        assert_eq!(to_text(Some(&json!("David"))), "David");
    }

    #[test]
    fn text_of_containers() {
        assert_eq!(to_text(Some(&json!(["MD", null, 3]))), "MD,,3");
        assert_eq!(to_text(Some(&json!({"a": 1}))), "[object Object]");
    }

    #[test]
    fn number_coercion() {
        assert!(to_number(None).is_nan());
        assert_eq!(to_number(Some(&Value::Null)), 0.0);
        assert_eq!(to_number(Some(&json!(false))), 0.0);
        assert_eq!(to_number(Some(&json!(" 42 "))), 42.0);
        assert_eq!(to_number(Some(&json!(""))), 0.0);
        assert!(to_number(Some(&json!("abc"))).is_nan());
        assert!(to_number(Some(&json!("inf"))).is_nan());
        assert_eq!(to_number(Some(&json!("-Infinity"))), f64::NEG_INFINITY);
        assert!(to_number(Some(&json!([1]))).is_nan());
    }

    #[test]
    fn empty_forms() {
        assert!(is_empty(None));
        assert!(is_empty(Some(&Value::Null)));
        assert!(is_empty(Some(&json!(""))));
        assert!(!is_empty(Some(&json!(" "))));
        assert!(!is_empty(Some(&json!(0))));
        assert!(!is_empty(Some(&json!([]))));
    }

    #[test]
    fn loose_equality() {
        assert!(loose_eq(Some(&json!(33)), Some(&json!("33"))));
        assert!(loose_eq(Some(&json!("APPROVED")), Some(&json!("approved"))));
        assert!(loose_eq(Some(&json!(true)), Some(&json!("TRUE"))));
        assert!(!loose_eq(Some(&json!(true)), Some(&json!(false))));
        assert!(loose_eq(None, Some(&json!("undefined"))));
    }

    #[test]
    fn type_names() {
        assert_eq!(value_type_name(None), "undefined");
        assert_eq!(value_type_name(Some(&json!([]))), "array");
    }
}
