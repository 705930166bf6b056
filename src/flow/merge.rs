// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Merging wizard submissions into the stored flow document
//!
//! The stored document is authoritative for which fields exist: an update
//! can change existing fields but never add new ones, and every value it
//! offers must have the runtime type already stored. Lists are replaced, not
//! merged.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::path::FieldPath;
use super::shape::{is_container, is_empty_container, is_indexed, is_keyed, member, ValueType};
use crate::error::FlowError;

/// Field names whose incoming value is accepted without any type check.
///
/// Matched by name at every nesting level. Values under these keys are not
/// validated at all, so they should only cover free-form structures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExceptionKeys(BTreeSet<String>);

impl ExceptionKeys {
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExceptionKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Merge `update` into `stored`, checking it against `blueprint`.
///
/// Returns the merged document, or the first [`FlowError`] found. On error
/// nothing of the update has been applied.
pub fn merge(
    stored: &Value,
    blueprint: &Value,
    update: &Value,
    exceptions: &ExceptionKeys,
) -> Result<Value, FlowError> {
    let root = FieldPath::root();
    match stored {
        // The document itself is always merged field by field, even when it
        // happens to look like a list.
        Value::Object(fields) => {
            ensure_compatible(stored, update, &root)?;
            let merged = merge_keyed(fields, Some(blueprint), update, exceptions, &root)?;
            Ok(Value::Object(merged))
        }
        _ => merge_value(stored, Some(blueprint), update, exceptions, &root),
    }
}

fn merge_keyed(
    stored: &Map<String, Value>,
    blueprint: Option<&Value>,
    update: &Value,
    exceptions: &ExceptionKeys,
    path: &FieldPath,
) -> Result<Map<String, Value>, FlowError> {
    let mut merged = stored.clone();

    for (key, current) in stored {
        let Some(offered) = member(update, key) else {
            continue;
        };

        let value = if exceptions.contains(key) {
            offered.clone()
        } else {
            let default = blueprint.and_then(|b| member(b, key));
            merge_value(current, default, offered, exceptions, &path.child(key))?
        };
        merged.insert(key.clone(), value);
    }

    Ok(merged)
}

fn merge_value(
    current: &Value,
    default: Option<&Value>,
    offered: &Value,
    exceptions: &ExceptionKeys,
    path: &FieldPath,
) -> Result<Value, FlowError> {
    ensure_compatible(current, offered, path)?;

    if !is_container(current) {
        return Ok(offered.clone());
    }

    if is_indexed(current) || default.is_some_and(is_indexed) {
        return Ok(offered.clone());
    }

    match current {
        Value::Object(fields) => {
            let merged = merge_keyed(fields, default, offered, exceptions, path)?;
            Ok(Value::Object(merged))
        }
        _ => Ok(offered.clone()),
    }
}

fn ensure_compatible(current: &Value, offered: &Value, path: &FieldPath) -> Result<(), FlowError> {
    let expected = ValueType::of(current);
    let offered_type = ValueType::of(offered);

    if !offered_type.matches(expected) {
        return Err(FlowError::WrongParamType {
            path: path.clone(),
            offered: offered_type,
            expected,
        });
    }

    // A record must not be silently swapped for a list.
    if is_indexed(offered) && is_keyed(current) && !is_empty_container(offered) {
        return Err(FlowError::WrongParamType {
            path: path.clone(),
            offered: ValueType::Indexed,
            expected: ValueType::Keyed,
        });
    }

    Ok(())
}
