// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Structural classification of flow document values
//!
//! Both reconciliation paths need the same answers about a value: is it a
//! container, is it empty, is it addressed by position or by name. They are
//! computed here once so the recursive walkers can pattern-match instead of
//! re-deriving them.

use std::fmt;

use serde_json::Value;

/// How a container addresses its members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Record with named fields
    Keyed,
    /// Ordered list addressed by position
    Indexed,
}

/// Runtime type of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Keyed,
    Indexed,
}

impl ValueType {
    /// Determine the runtime type of a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(n) if n.is_f64() => ValueType::Float,
            Value::Number(_) => ValueType::Integer,
            Value::String(_) => ValueType::String,
            Value::Array(_) | Value::Object(_) => match classify(value) {
                Some(Shape::Keyed) => ValueType::Keyed,
                _ => ValueType::Indexed,
            },
        }
    }

    /// Whether this is one of the container types.
    pub fn is_container(self) -> bool {
        matches!(self, ValueType::Keyed | ValueType::Indexed)
    }

    /// Two types match when they are equal, or when both are containers.
    ///
    /// Keyed and indexed containers count as the same runtime type; the
    /// walkers tell them apart through [`classify`] where it matters.
    pub fn matches(self, other: ValueType) -> bool {
        self == other || (self.is_container() && other.is_container())
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Keyed => "keyed container",
            ValueType::Indexed => "indexed container",
        };
        write!(f, "{}", name)
    }
}

/// Classify a container as keyed or indexed. Returns `None` for scalars.
///
/// Arrays are always indexed. An object is indexed when every key is a
/// canonical non-negative integer, so `{"0": .., "1": ..}` behaves as a
/// list. Empty containers of either kind are indexed.
pub fn classify(value: &Value) -> Option<Shape> {
    match value {
        Value::Array(_) => Some(Shape::Indexed),
        Value::Object(map) => {
            if map.keys().all(|k| is_position_key(k)) {
                Some(Shape::Indexed)
            } else {
                Some(Shape::Keyed)
            }
        }
        _ => None,
    }
}

/// Whether the value is indexed. Scalars are not.
pub fn is_indexed(value: &Value) -> bool {
    classify(value) == Some(Shape::Indexed)
}

/// Whether the value is keyed. Scalars are not.
pub fn is_keyed(value: &Value) -> bool {
    classify(value) == Some(Shape::Keyed)
}

pub fn is_container(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// A container with no members. Scalars are never empty containers,
/// including `""`, `0` and `null`.
pub fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Whether two values share a runtime type.
pub fn same_type(a: &Value, b: &Value) -> bool {
    ValueType::of(a).matches(ValueType::of(b))
}

/// View a container's members as `(key, value)` pairs.
///
/// Array members are keyed by their position. Scalars have no members.
pub fn members(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        _ => Vec::new(),
    }
}

/// Look up a member by key in either kind of container.
pub fn member<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => {
            if is_position_key(key) {
                key.parse::<usize>().ok().and_then(|i| items.get(i))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn is_position_key(key: &str) -> bool {
    match key.as_bytes() {
        [] => false,
        [b'0'] => true,
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(|b| b.is_ascii_digit())
        }
    }
}
