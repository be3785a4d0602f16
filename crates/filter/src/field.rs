//! Field descriptors: the static description of what can be filtered on.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{FilterError, FilterResult};
use crate::operator::Operator;

/// Type classification of a filterable field.
///
/// The type alone decides which operators a rule on the field may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text
    Text,
    /// Numeric value
    Number,
    /// Calendar date or timestamp
    Date,
    /// One of an enumerated set of options
    Select,
    /// True / false flag
    Boolean,
}

impl FieldType {
    /// Operators available for this type, in dropdown order.
    pub const fn operators(self) -> &'static [Operator] {
        use Operator::*;
        match self {
            Self::Text => &[
                Equals,
                NotEquals,
                Contains,
                NotContains,
                StartsWith,
                EndsWith,
                IsEmpty,
                IsNotEmpty,
            ],
            Self::Number => &[
                Equals,
                NotEquals,
                GreaterThan,
                LessThan,
                GreaterOrEqual,
                LessOrEqual,
                Between,
                IsEmpty,
                IsNotEmpty,
            ],
            Self::Date => &[Equals, Before, After, Between, InLast, IsEmpty, IsNotEmpty],
            Self::Select => &[Equals, NotEquals, In, NotIn, IsEmpty, IsNotEmpty],
            Self::Boolean => &[Equals, IsEmpty, IsNotEmpty],
        }
    }

    /// Whether `operator` may be used on a field of this type.
    pub fn allows(self, operator: Operator) -> bool {
        self.operators().contains(&operator)
    }

    /// Lowercase wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One allowed value of a select field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value stored in records and rules
    pub value: Value,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Static metadata for one filterable field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Dotted path into the record; unique within a catalog
    pub key: String,
    /// Display label
    pub label: String,
    /// Type classification
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Allowed values, for select fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FieldDescriptor {
    /// Creates a descriptor of any type without options.
    pub fn new(key: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            field_type,
            options: Vec::new(),
        }
    }

    /// Text field.
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Text)
    }

    /// Number field.
    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Number)
    }

    /// Date field.
    pub fn date(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Date)
    }

    /// Boolean field.
    pub fn boolean(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldType::Boolean)
    }

    /// Select field with its options.
    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = SelectOption>,
    ) -> Self {
        Self {
            options: options.into_iter().collect(),
            ..Self::new(key, label, FieldType::Select)
        }
    }

    /// Operators a rule on this field may use.
    pub fn operators(&self) -> &'static [Operator] {
        self.field_type.operators()
    }
}

/// An ordered set of field descriptors indexed by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldDescriptor>", into = "Vec<FieldDescriptor>")]
pub struct FieldCatalog {
    fields: IndexMap<String, FieldDescriptor>,
}

impl FieldCatalog {
    /// Build a catalog, rejecting repeated keys.
    pub fn try_new(descriptors: impl IntoIterator<Item = FieldDescriptor>) -> FilterResult<Self> {
        let mut fields = IndexMap::new();
        for descriptor in descriptors {
            if fields.contains_key(&descriptor.key) {
                return Err(FilterError::DuplicateField {
                    field: descriptor.key,
                });
            }
            fields.insert(descriptor.key.clone(), descriptor);
        }
        Ok(Self { fields })
    }

    /// Parse a catalog from a JSON array of descriptors.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.get(key)
    }

    /// Whether the catalog describes `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Operators available for `key`, or `None` for an unknown field.
    pub fn operators_for(&self, key: &str) -> Option<&'static [Operator]> {
        self.get(key).map(FieldDescriptor::operators)
    }

    /// Descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the catalog has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Vec<FieldDescriptor>> for FieldCatalog {
    type Error = FilterError;

    fn try_from(descriptors: Vec<FieldDescriptor>) -> FilterResult<Self> {
        Self::try_new(descriptors)
    }
}

impl From<FieldCatalog> for Vec<FieldDescriptor> {
    fn from(catalog: FieldCatalog) -> Self {
        catalog.fields.into_values().collect()
    }
}

impl<'a> IntoIterator for &'a FieldCatalog {
    type Item = &'a FieldDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}
