//! Operator dispatch.
//!
//! A rule's operator and values are turned into a [`Check`] once per
//! evaluation. The check holds a positive [`Condition`], tested against each
//! resolved field value, and flips the path's overall result for the negated
//! operators. Nothing here fails: values that do not coerce simply do not match.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::coerce;
use crate::date::{self, DurationUnit};
use crate::operator::Operator;
use crate::path::FieldPath;

/// An expected value for `equals` / `in`, pre-folded for comparison.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Expected {
    folded: String,
    flag: Option<bool>,
}

impl Expected {
    fn new(value: Option<&Value>) -> Self {
        Self {
            folded: coerce::to_folded_text(value),
            flag: value.and_then(Value::as_bool),
        }
    }

    fn matches(&self, actual: Option<&Value>) -> bool {
        match (self.flag, actual) {
            (Some(expected), Some(Value::Bool(actual))) => expected == *actual,
            _ => coerce::to_folded_text(actual) == self.folded,
        }
    }
}

/// Bounds of a `between` rule.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Range {
    Numeric { lower: f64, upper: f64 },
    Calendar { lower: NaiveDate, upper: NaiveDate },
    Unbounded,
}

impl Range {
    // Numeric when both bounds read as numbers, calendar dates otherwise.
    fn new(lower: Option<&Value>, upper: Option<&Value>) -> Self {
        let (lo, hi) = (coerce::to_number(lower), coerce::to_number(upper));
        if !lo.is_nan() && !hi.is_nan() {
            return Self::Numeric {
                lower: lo,
                upper: hi,
            };
        }
        match (
            date::parse_calendar_date(lower),
            date::parse_calendar_date(upper),
        ) {
            (Some(lower), Some(upper)) => Self::Calendar { lower, upper },
            _ => Self::Unbounded,
        }
    }

    fn contains(&self, actual: Option<&Value>) -> bool {
        match self {
            Self::Numeric { lower, upper } => {
                let n = coerce::to_number(actual);
                *lower <= n && n <= *upper
            }
            Self::Calendar { lower, upper } => date::parse_calendar_date(actual)
                .is_some_and(|d| *lower <= d && d <= *upper),
            Self::Unbounded => false,
        }
    }
}

/// A compiled predicate over one resolved field value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Condition {
    /// Fixed outcome without looking at the record
    Always(bool),
    Equals(Expected),
    Contains(String),
    StartsWith(String),
    EndsWith(String),
    IsEmpty,
    GreaterThan(f64),
    LessThan(f64),
    GreaterOrEqual(f64),
    LessOrEqual(f64),
    Between(Range),
    Before(Option<NaiveDate>),
    After(Option<NaiveDate>),
    /// Closed window `[from, to]`; `None` when count or unit is unusable
    Within(Option<(DateTime<Utc>, DateTime<Utc>)>),
    In(Vec<Expected>),
}

impl Condition {
    /// Compile a positive `operator` with the rule's values against the
    /// evaluation instant.
    fn compile(
        operator: Operator,
        value: Option<&Value>,
        second: Option<&Value>,
        now: DateTime<Utc>,
    ) -> Self {
        let folded = || coerce::to_folded_text(value);
        match operator {
            Operator::Equals | Operator::NotEquals => Self::Equals(Expected::new(value)),
            Operator::Contains | Operator::NotContains => Self::Contains(folded()),
            Operator::StartsWith => Self::StartsWith(folded()),
            Operator::EndsWith => Self::EndsWith(folded()),
            Operator::IsEmpty | Operator::IsNotEmpty => Self::IsEmpty,
            Operator::GreaterThan => Self::GreaterThan(coerce::to_number(value)),
            Operator::LessThan => Self::LessThan(coerce::to_number(value)),
            Operator::GreaterOrEqual => Self::GreaterOrEqual(coerce::to_number(value)),
            Operator::LessOrEqual => Self::LessOrEqual(coerce::to_number(value)),
            Operator::Between => Self::Between(Range::new(value, second)),
            Operator::Before => Self::Before(date::parse_calendar_date(value)),
            Operator::After => Self::After(date::parse_calendar_date(value)),
            Operator::InLast => Self::Within(window(value, second, now)),
            Operator::In | Operator::NotIn => Self::In(candidates(value)),
        }
    }

    /// Test a resolved field value; `None` is an absent field.
    fn test(&self, actual: Option<&Value>) -> bool {
        match self {
            Self::Always(outcome) => *outcome,
            Self::Equals(expected) => expected.matches(actual),
            Self::Contains(needle) => coerce::to_folded_text(actual).contains(needle.as_str()),
            Self::StartsWith(prefix) => coerce::to_folded_text(actual).starts_with(prefix.as_str()),
            Self::EndsWith(suffix) => coerce::to_folded_text(actual).ends_with(suffix.as_str()),
            Self::IsEmpty => coerce::is_empty(actual),
            Self::GreaterThan(rhs) => coerce::to_number(actual) > *rhs,
            Self::LessThan(rhs) => coerce::to_number(actual) < *rhs,
            Self::GreaterOrEqual(rhs) => coerce::to_number(actual) >= *rhs,
            Self::LessOrEqual(rhs) => coerce::to_number(actual) <= *rhs,
            Self::Between(range) => range.contains(actual),
            Self::Before(bound) => bound.is_some_and(|bound| {
                date::parse_calendar_date(actual).is_some_and(|d| d < bound)
            }),
            Self::After(bound) => bound.is_some_and(|bound| {
                date::parse_calendar_date(actual).is_some_and(|d| d > bound)
            }),
            Self::Within(window) => window.is_some_and(|(from, to)| {
                date::parse_instant(actual).is_some_and(|d| from <= d && d <= to)
            }),
            Self::In(candidates) => candidates.iter().any(|c| c.matches(actual)),
        }
    }
}

/// A compiled rule test: a positive condition, negated as a whole for
/// `notEquals`, `notContains`, `isNotEmpty` and `notIn`.
///
/// Negation applies to the existential result over the path, so a negated
/// operator never holds together with its positive form.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Check {
    condition: Condition,
    negated: bool,
}

impl Check {
    /// Compile `operator` with the rule's values against the evaluation instant.
    pub(crate) fn compile(
        operator: Operator,
        value: Option<&Value>,
        second: Option<&Value>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            condition: Condition::compile(operator, value, second, now),
            negated: operator.negates().is_some(),
        }
    }

    /// A check with a fixed outcome that never reads the record.
    pub(crate) const fn always(outcome: bool) -> Self {
        Self {
            condition: Condition::Always(outcome),
            negated: false,
        }
    }

    /// Whether the value at `path` in `record` passes.
    pub(crate) fn passes(&self, path: &FieldPath, record: &Value) -> bool {
        if let Condition::Always(outcome) = self.condition {
            return outcome;
        }
        self.negated != path.any_match(record, |value| self.condition.test(value))
    }
}

fn window(
    count: Option<&Value>,
    unit: Option<&Value>,
    now: DateTime<Utc>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let count = date::parse_count(count)?;
    let from = DurationUnit::from_value(unit)?.back_from(now, count)?;
    Some((from, now))
}

fn candidates(value: Option<&Value>) -> Vec<Expected> {
    match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(|item| Expected::new(Some(item))).collect(),
        Some(scalar) => vec![Expected::new(Some(scalar))],
    }
}
