//! The filter engine: conjunctive evaluation of a rule list over records.

use serde_json::Value;

use crate::config::{FilterConfig, UnknownOperatorPolicy};
use crate::eval::Check;
use crate::path::FieldPath;
use crate::rule::FilterRule;

/// Applies rule lists to records.
///
/// Holds only configuration, so one engine can be shared freely. Every
/// call is a pure read-only projection of its inputs.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    config: FilterConfig,
}

impl FilterEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Compile `rules` for repeated evaluation.
    ///
    /// Reads the evaluation instant once, so every record in one pass sees
    /// the same `inLast` window.
    pub fn compile(&self, rules: &[FilterRule]) -> CompiledRules {
        let now = self.config.now();
        let mut compiled = Vec::with_capacity(rules.len());
        let mut inert = 0;
        for rule in rules {
            if rule.is_inert() {
                inert += 1;
                continue;
            }
            let check = match rule.parsed_operator() {
                Ok(operator) => Check::compile(
                    operator,
                    rule.value.as_ref(),
                    rule.second_value.as_ref(),
                    now,
                ),
                Err(_) => {
                    let policy = self.config.unknown_operator;
                    roster_log::warn!(
                        rule = %rule.id,
                        field = %rule.field,
                        operator = %rule.operator,
                        ?policy,
                        "unknown filter operator"
                    );
                    Check::always(policy == UnknownOperatorPolicy::MatchAll)
                }
            };
            compiled.push(CompiledRule {
                path: FieldPath::parse(&rule.field),
                check,
            });
        }
        CompiledRules {
            rules: compiled,
            inert,
        }
    }

    /// Records matching every rule, in their original order.
    ///
    /// An empty rule list returns every record.
    pub fn apply<'a>(&self, records: &'a [Value], rules: &[FilterRule]) -> Vec<&'a Value> {
        let compiled = self.compile(rules);
        let matched = compiled.filter(records);
        roster_log::debug!(
            rules = rules.len(),
            active = compiled.len(),
            records = records.len(),
            matched = matched.len(),
            "applied filter rules"
        );
        matched
    }

    /// Like [`apply`](Self::apply), cloning the matching records.
    pub fn apply_owned(&self, records: &[Value], rules: &[FilterRule]) -> Vec<Value> {
        self.apply(records, rules).into_iter().cloned().collect()
    }

    /// Whether one record matches every rule.
    pub fn matches(&self, record: &Value, rules: &[FilterRule]) -> bool {
        self.compile(rules).matches(record)
    }
}

/// Filter records with the default configuration.
pub fn apply<'a>(records: &'a [Value], rules: &[FilterRule]) -> Vec<&'a Value> {
    FilterEngine::default().apply(records, rules)
}

#[derive(Debug, Clone)]
struct CompiledRule {
    path: FieldPath,
    check: Check,
}

impl CompiledRule {
    fn matches(&self, record: &Value) -> bool {
        self.check.passes(&self.path, record)
    }
}

/// A rule list with paths parsed and operators resolved.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    rules: Vec<CompiledRule>,
    inert: usize,
}

impl CompiledRules {
    /// Whether `record` satisfies every active rule.
    pub fn matches(&self, record: &Value) -> bool {
        self.rules.iter().all(|rule| rule.matches(record))
    }

    /// Matching records in their original order.
    pub fn filter<'a>(&self, records: &'a [Value]) -> Vec<&'a Value> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .collect()
    }

    /// Number of active rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule is active, in which case every record matches.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of inert rules that were skipped.
    pub fn inert(&self) -> usize {
        self.inert
    }
}
