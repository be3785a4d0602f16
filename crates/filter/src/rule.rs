//! Filter rules and the editable rule list behind the rule builder.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::operator::{Operator, ParseOperatorError};

/// One `(field, operator, value)` predicate.
///
/// Fields are plain strings because a rule under construction may hold a
/// half-filled or unknown operator. A rule with an empty field or operator
/// is inert and matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterRule {
    /// Identifier, unique within a rule set
    pub id: String,
    /// Dotted field path
    pub field: String,
    /// Operator wire name
    pub operator: String,
    /// Primary value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Second value, read only by `between` and `inLast`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_value: Option<Value>,
}

impl FilterRule {
    /// A fresh rule slot with nothing filled in.
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// A complete rule.
    pub fn new(
        id: impl Into<String>,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            id: id.into(),
            field: field.into(),
            operator: operator.as_str().to_string(),
            value: Some(value.into()),
            second_value: None,
        }
    }

    /// A rule for an operator that reads no value, such as `isEmpty`.
    pub fn unary(id: impl Into<String>, field: impl Into<String>, operator: Operator) -> Self {
        Self {
            id: id.into(),
            field: field.into(),
            operator: operator.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Set the second value (upper bound of `between`, unit of `inLast`).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_second_value(mut self, value: impl Into<Value>) -> Self {
        self.second_value = Some(value.into());
        self
    }

    /// Whether the rule is still under construction.
    pub fn is_inert(&self) -> bool {
        self.field.is_empty() || self.operator.is_empty()
    }

    /// Parse the operator name.
    pub fn parsed_operator(&self) -> Result<Operator, ParseOperatorError> {
        self.operator.parse()
    }

    /// Point the rule at another field.
    ///
    /// The old operator and values may not fit the new field's type, so they
    /// are cleared.
    pub fn set_field(&mut self, field: impl Into<String>) {
        let field = field.into();
        if field != self.field {
            self.field = field;
            self.operator.clear();
            self.value = None;
            self.second_value = None;
        }
    }

    /// Change the operator, dropping a second value the new operator ignores.
    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = operator.as_str().to_string();
        if !operator.takes_second_value() {
            self.second_value = None;
        }
        if !operator.takes_value() {
            self.value = None;
        }
    }

    /// Set the primary value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// Set the second value.
    pub fn set_second_value(&mut self, value: impl Into<Value>) {
        self.second_value = Some(value.into());
    }
}

/// An ordered list of rules, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterRuleSet {
    rules: Vec<FilterRule>,
}

impl FilterRuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty rule with a fresh identifier and return it for editing.
    pub fn add_empty(&mut self) -> &mut FilterRule {
        let index = self.rules.len();
        self.rules
            .push(FilterRule::empty(Uuid::new_v4().to_string()));
        &mut self.rules[index]
    }

    /// Append a rule.
    pub fn push(&mut self, rule: FilterRule) {
        self.rules.push(rule);
    }

    /// Remove the rule with `id`, returning it.
    pub fn remove(&mut self, id: &str) -> Option<FilterRule> {
        let index = self.rules.iter().position(|rule| rule.id == id)?;
        Some(self.rules.remove(index))
    }

    /// Find a rule by identifier.
    pub fn get(&self, id: &str) -> Option<&FilterRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Find a rule by identifier for editing.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut FilterRule> {
        self.rules.iter_mut().find(|rule| rule.id == id)
    }

    /// Remove every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }

    /// Rules that take part in filtering.
    pub fn active(&self) -> impl Iterator<Item = &FilterRule> {
        self.rules.iter().filter(|rule| !rule.is_inert())
    }

    /// All rules in order.
    pub fn iter(&self) -> std::slice::Iter<'_, FilterRule> {
        self.rules.iter()
    }

    /// All rules as a slice, the shape [`FilterEngine::apply`](crate::FilterEngine::apply) takes.
    pub fn as_slice(&self) -> &[FilterRule] {
        &self.rules
    }

    /// Number of rules, inert ones included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl AsRef<[FilterRule]> for FilterRuleSet {
    fn as_ref(&self) -> &[FilterRule] {
        &self.rules
    }
}

impl From<Vec<FilterRule>> for FilterRuleSet {
    fn from(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<FilterRule> for FilterRuleSet {
    fn from_iter<I: IntoIterator<Item = FilterRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FilterRuleSet {
    type Item = FilterRule;
    type IntoIter = std::vec::IntoIter<FilterRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterRuleSet {
    type Item = &'a FilterRule;
    type IntoIter = std::slice::Iter<'a, FilterRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn wire_shape_is_camel_case() {
        let rule = FilterRule::new("r1", "npi", Operator::Between, 1_000_000_000_u64)
            .with_second_value(2_000_000_000_u64);
        assert_eq!(
            serde_json::to_value(&rule).unwrap(),
            json!({
                "id": "r1",
                "field": "npi",
                "operator": "between",
                "value": 1_000_000_000_u64,
                "secondValue": 2_000_000_000_u64
            })
        );
    }

    #[test]
    fn partial_rules_deserialize() {
        let rule: FilterRule = serde_json::from_value(json!({"id": "r2"})).unwrap();
        assert_eq!(rule, FilterRule::empty("r2"));
        assert!(rule.is_inert());

        let rule: FilterRule =
            serde_json::from_value(json!({"id": "r3", "field": "email", "operator": "isEmpty"}))
                .unwrap();
        assert!(!rule.is_inert());
        assert_eq!(rule.value, None);
    }

    #[test]
    fn unknown_operator_names_are_kept() {
        let rule: FilterRule =
            serde_json::from_value(json!({"id": "r4", "field": "npi", "operator": "regex"}))
                .unwrap();
        assert_eq!(rule.operator, "regex");
        assert!(rule.parsed_operator().is_err());
    }

    #[test]
    fn changing_field_resets_the_rest() {
        let mut rule = FilterRule::new("r5", "npi", Operator::Between, 1).with_second_value(9);
        rule.set_field("npi");
        assert_eq!(rule.operator, "between");

        rule.set_field("createdAt");
        assert_eq!(rule.field, "createdAt");
        assert!(rule.operator.is_empty());
        assert_eq!(rule.value, None);
        assert_eq!(rule.second_value, None);
    }

    #[test]
    fn changing_operator_drops_unused_values() {
        let mut rule = FilterRule::new("r6", "createdAt", Operator::InLast, 7)
            .with_second_value("days");
        rule.set_operator(Operator::Before);
        assert_eq!(rule.second_value, None);
        assert_eq!(rule.value, Some(json!(7)));

        rule.set_operator(Operator::IsEmpty);
        assert_eq!(rule.value, None);
    }

    #[test]
    fn rule_set_lifecycle() {
        let mut set = FilterRuleSet::new();
        let id = {
            let rule = set.add_empty();
            rule.set_field("firstName");
            rule.set_operator(Operator::Contains);
            rule.set_value("dav");
            rule.id.clone()
        };
        set.add_empty();

        assert_eq!(set.len(), 2);
        assert_eq!(set.active().count(), 1);
        assert_eq!(set.get(&id).unwrap().value, Some(json!("dav")));

        set.get_mut(&id).unwrap().set_value("sar");
        assert_eq!(set.get(&id).unwrap().value, Some(json!("sar")));

        let removed = set.remove(&id).unwrap();
        assert_eq!(removed.field, "firstName");
        assert!(set.remove(&id).is_none());
        assert_eq!(set.active().count(), 0);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn generated_ids_are_distinct() {
        let mut set = FilterRuleSet::new();
        let a = set.add_empty().id.clone();
        let b = set.add_empty().id.clone();
        assert_ne!(a, b);
    }
}
