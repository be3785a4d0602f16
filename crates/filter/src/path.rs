//! Dotted field paths over nested records.
//!
//! A path such as `address.stateId` walks object keys left to right. When
//! the walk meets an array with segments still to go, it branches: the rest
//! of the path is resolved against every element and the predicate holds if
//! it holds for any of them. An empty array there reads as an absent field.
//! This is the only place records are read by key.

use serde_json::Value;
use smallvec::SmallVec;
use std::fmt;

/// A parsed dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: SmallVec<[String; 4]>,
}

impl FieldPath {
    /// Split a dotted path into segments. Never fails; odd paths simply
    /// resolve to nothing.
    pub fn parse(path: &str) -> Self {
        Self {
            raw: path.to_string(),
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// The path as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Test `predicate` against the value at this path.
    ///
    /// `predicate` receives `None` when the path is absent, including when
    /// it crosses an empty array. Across a non-empty array the result is
    /// existential.
    pub fn any_match<F>(&self, record: &Value, mut predicate: F) -> bool
    where
        F: FnMut(Option<&Value>) -> bool,
    {
        walk(record, &self.segments, &mut predicate)
    }
}

fn walk<F>(current: &Value, rest: &[String], predicate: &mut F) -> bool
where
    F: FnMut(Option<&Value>) -> bool,
{
    let Some((head, tail)) = rest.split_first() else {
        return predicate(Some(current));
    };
    match current {
        Value::Array(items) if items.is_empty() => predicate(None),
        Value::Array(items) => items.iter().any(|item| walk(item, rest, predicate)),
        Value::Object(map) => match map.get(head.as_str()) {
            Some(next) => walk(next, tail, predicate),
            None => predicate(None),
        },
        _ => predicate(None),
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}
