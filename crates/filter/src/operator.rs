//! Filter operators and their names on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A comparison a rule applies to a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// Case-insensitive equality by string form (exact for booleans)
    Equals,
    /// Negation of [`Operator::Equals`]
    NotEquals,
    /// Case-insensitive substring
    Contains,
    /// Negation of [`Operator::Contains`]
    NotContains,
    /// Case-insensitive prefix
    StartsWith,
    /// Case-insensitive suffix
    EndsWith,
    /// Absent, `null` or `""`
    IsEmpty,
    /// Negation of [`Operator::IsEmpty`]
    IsNotEmpty,
    /// Numeric `>`
    GreaterThan,
    /// Numeric `<`
    LessThan,
    /// Numeric `>=`
    GreaterOrEqual,
    /// Numeric `<=`
    LessOrEqual,
    /// Inclusive range between the value and the second value
    Between,
    /// Strictly earlier calendar date
    Before,
    /// Strictly later calendar date
    After,
    /// Within the last N days, weeks, months or years
    InLast,
    /// Member of the value list
    In,
    /// Not a member of the value list
    NotIn,
}

impl Operator {
    /// Every operator, in the order the rule builder lists them.
    pub const ALL: [Self; 18] = [
        Self::Equals,
        Self::NotEquals,
        Self::Contains,
        Self::NotContains,
        Self::StartsWith,
        Self::EndsWith,
        Self::IsEmpty,
        Self::IsNotEmpty,
        Self::GreaterThan,
        Self::LessThan,
        Self::GreaterOrEqual,
        Self::LessOrEqual,
        Self::Between,
        Self::Before,
        Self::After,
        Self::InLast,
        Self::In,
        Self::NotIn,
    ];

    /// Wire name, as stored in a rule's `operator` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::IsEmpty => "isEmpty",
            Self::IsNotEmpty => "isNotEmpty",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::GreaterOrEqual => "greaterOrEqual",
            Self::LessOrEqual => "lessOrEqual",
            Self::Between => "between",
            Self::Before => "before",
            Self::After => "after",
            Self::InLast => "inLast",
            Self::In => "in",
            Self::NotIn => "notIn",
        }
    }

    /// Label shown in the rule builder's operator dropdown.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "does not equal",
            Self::Contains => "contains",
            Self::NotContains => "does not contain",
            Self::StartsWith => "starts with",
            Self::EndsWith => "ends with",
            Self::IsEmpty => "is empty",
            Self::IsNotEmpty => "is not empty",
            Self::GreaterThan => "greater than",
            Self::LessThan => "less than",
            Self::GreaterOrEqual => "greater than or equal",
            Self::LessOrEqual => "less than or equal",
            Self::Between => "between",
            Self::Before => "before",
            Self::After => "after",
            Self::InLast => "in the last",
            Self::In => "is any of",
            Self::NotIn => "is none of",
        }
    }

    /// Whether the operator reads the rule's primary value.
    pub const fn takes_value(self) -> bool {
        !matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }

    /// Whether the operator reads the rule's second value.
    pub const fn takes_second_value(self) -> bool {
        matches!(self, Self::Between | Self::InLast)
    }

    /// The positive operator this one negates, if it is a negation.
    pub const fn negates(self) -> Option<Self> {
        match self {
            Self::NotEquals => Some(Self::Equals),
            Self::NotContains => Some(Self::Contains),
            Self::IsNotEmpty => Some(Self::IsEmpty),
            Self::NotIn => Some(Self::In),
            _ => None,
        }
    }

    /// Whether the primary value is a list of candidates.
    pub const fn takes_list(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an operator name the engine does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator '{0}'")]
pub struct ParseOperatorError(pub String);

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| ParseOperatorError(s.to_string()))
    }
}
