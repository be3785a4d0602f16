//! # roster-filter
//!
//! Field/operator/value filter rules for the provider, credentialing and
//! upload-history tables.
//!
//! Records are `serde_json::Value` objects with no fixed schema. A rule
//! names a dotted field path, an operator and a value; a rule list keeps the
//! records that satisfy every rule. When a path crosses an array, the rule
//! holds if any element satisfies it.
//!
//! ## Quick Start
//!
//! ```
//! use roster_filter::prelude::*;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"firstName": "David", "basicInfo": {"cred_approval_status": "APPROVED"}}),
//!     json!({"firstName": "Sarah", "basicInfo": {"cred_approval_status": "PENDING"}}),
//! ];
//! let rules = [FilterRule::new(
//!     "status",
//!     "basicInfo.cred_approval_status",
//!     Operator::Equals,
//!     "approved",
//! )];
//!
//! let matched = FilterEngine::default().apply(&records, &rules);
//! assert_eq!(matched, vec![&records[0]]);
//! ```
//!
//! ## Robustness
//!
//! Filtering never fails. Rules with an empty field or operator are skipped,
//! unknown operators match everything (see [`UnknownOperatorPolicy`]), and
//! values that do not coerce to the operator's domain simply do not match.
//! Use [`validate_rules`] against a [`FieldCatalog`] to report such rules.

pub mod catalog;
pub mod coerce;
pub mod config;
pub mod date;
mod engine;
mod error;
mod eval;
pub mod field;
pub mod operator;
pub mod path;
pub mod rule;
mod validate;

pub use catalog::BUILTIN_CATALOGS;
pub use config::{FilterConfig, UnknownOperatorPolicy};
pub use date::DurationUnit;
pub use engine::{CompiledRules, FilterEngine, apply};
pub use error::{FilterError, FilterResult};
pub use field::{FieldCatalog, FieldDescriptor, FieldType, SelectOption};
pub use operator::{Operator, ParseOperatorError};
pub use path::FieldPath;
pub use rule::{FilterRule, FilterRuleSet};
pub use validate::{validate_rule, validate_rules};

/// Common imports for building and applying rules
pub mod prelude {
    pub use crate::{
        FieldCatalog, FieldDescriptor, FieldType, FilterConfig, FilterEngine, FilterError,
        FilterRule, FilterRuleSet, Operator, UnknownOperatorPolicy, validate_rules,
    };
}
