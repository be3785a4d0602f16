//! Engine configuration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a rule with an unrecognised operator does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnknownOperatorPolicy {
    /// The rule matches every record (fail open)
    #[default]
    MatchAll,
    /// The rule matches no record
    MatchNone,
}

/// Filter engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Instant `inLast` windows are measured back from. When unset, the wall
    /// clock is read once at the start of every evaluation.
    pub reference_time: Option<DateTime<Utc>>,

    /// Handling of operator names the engine does not know
    pub unknown_operator: UnknownOperatorPolicy,
}

impl FilterConfig {
    /// Pin the evaluation instant.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// Set the unknown-operator policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_unknown_operator(mut self, policy: UnknownOperatorPolicy) -> Self {
        self.unknown_operator = policy;
        self
    }

    /// The instant an evaluation starting now should use.
    pub fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }
}
