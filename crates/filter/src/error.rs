//! Errors reported by rule validation and catalog construction.
//!
//! Filtering itself never fails; these errors only come out of
//! [`validate_rules`](crate::validate_rules) and [`FieldCatalog`](crate::FieldCatalog)
//! construction.

use crate::field::FieldType;
use crate::operator::Operator;

/// Error type for rule validation and catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FilterError {
    /// The rule names a field the catalog does not describe.
    #[error("rule '{rule}': unknown field '{field}'")]
    UnknownField {
        /// Rule identifier
        rule: String,
        /// Field key as written in the rule
        field: String,
    },

    /// The rule's operator is not a known operator name.
    #[error("rule '{rule}': unknown operator '{operator}'")]
    UnknownOperator {
        /// Rule identifier
        rule: String,
        /// Operator as written in the rule
        operator: String,
    },

    /// The operator exists but does not apply to the field's type.
    #[error("rule '{rule}': operator '{operator}' is not available for {field_type} field '{field}'")]
    OperatorNotAllowed {
        /// Rule identifier
        rule: String,
        /// Field key
        field: String,
        /// Offending operator
        operator: Operator,
        /// Declared type of the field
        field_type: FieldType,
    },

    /// The operator needs a value and the rule has none.
    #[error("rule '{rule}': operator '{operator}' needs a value")]
    MissingValue {
        /// Rule identifier
        rule: String,
        /// Operator that needs the value
        operator: Operator,
    },

    /// `between` or `inLast` without its second value.
    #[error("rule '{rule}': operator '{operator}' needs a second value")]
    MissingSecondValue {
        /// Rule identifier
        rule: String,
        /// Operator that needs the second value
        operator: Operator,
    },

    /// `inLast` count that is not a non-negative whole number.
    #[error("rule '{rule}': '{count}' is not a whole number of units")]
    InvalidCount {
        /// Rule identifier
        rule: String,
        /// Count as written
        count: String,
    },

    /// `inLast` unit that is not days, weeks, months or years.
    #[error("rule '{rule}': '{unit}' is not a duration unit (expected days, weeks, months or years)")]
    InvalidUnit {
        /// Rule identifier
        rule: String,
        /// Unit as written
        unit: String,
    },

    /// A select rule value outside the field's declared options.
    #[error("rule '{rule}': '{value}' is not an option of select field '{field}'")]
    UnknownOption {
        /// Rule identifier
        rule: String,
        /// Select field key
        field: String,
        /// Offending value, in string form
        value: String,
    },

    /// Two descriptors in one catalog share a key.
    #[error("field '{field}' is declared more than once")]
    DuplicateField {
        /// Repeated key
        field: String,
    },
}

impl FilterError {
    /// Identifier of the rule the error is about, if it is about a rule.
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Self::UnknownField { rule, .. }
            | Self::UnknownOperator { rule, .. }
            | Self::OperatorNotAllowed { rule, .. }
            | Self::MissingValue { rule, .. }
            | Self::MissingSecondValue { rule, .. }
            | Self::InvalidCount { rule, .. }
            | Self::InvalidUnit { rule, .. }
            | Self::UnknownOption { rule, .. } => Some(rule),
            Self::DuplicateField { .. } => None,
        }
    }
}

/// Result type for catalog and validation operations
pub type FilterResult<T> = Result<T, FilterError>;
