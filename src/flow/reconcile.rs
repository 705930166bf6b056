// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Version reconciliation
//!
//! Brings a stored flow document written by an older version up to the shape
//! of the current blueprint. The blueprint decides which fields exist and what
//! type they have; the stored document keeps its leaf values wherever they are
//! still type-compatible. Anything missing or malformed falls back to the
//! blueprint default, so the walk never fails.

use serde_json::{Map, Value};

use super::rename::RenameRules;
use super::shape::{classify, is_container, is_empty_container, members, same_type, Shape};

/// Reconcile `stored` against `blueprint`.
///
/// The returned document has the blueprint's key set and nesting. The caller
/// is responsible for stamping the blueprint version on the result.
pub fn reconcile(blueprint: &Value, stored: &Value, rules: &RenameRules) -> Value {
    reconcile_field(blueprint, Some(stored), rules)
}

fn reconcile_field(default: &Value, stored: Option<&Value>, rules: &RenameRules) -> Value {
    let Some(stored) = stored else {
        return default.clone();
    };

    if !same_type(default, stored) {
        return default.clone();
    }

    // Scalar leaves and free-form containers keep whatever the user stored.
    if !is_container(default) || is_empty_container(default) {
        return stored.clone();
    }

    match (classify(default), default) {
        (Some(Shape::Keyed), Value::Object(fields)) => {
            Value::Object(reconcile_keyed(fields, stored, rules))
        }
        // Lists are never merged element-wise. The last default element
        // decides: a scalar marks user data, a structure marks schema and
        // the default wins.
        _ => {
            let last_is_scalar = members(default)
                .last()
                .is_some_and(|(_, item)| !is_container(item));
            if last_is_scalar {
                stored.clone()
            } else {
                default.clone()
            }
        }
    }
}

fn reconcile_keyed(
    fields: &Map<String, Value>,
    stored: &Value,
    rules: &RenameRules,
) -> Map<String, Value> {
    let mut siblings: Map<String, Value> = members(stored)
        .into_iter()
        .map(|(key, value)| (key, value.clone()))
        .collect();

    let mut reconciled = Map::with_capacity(fields.len());
    for (key, default) in fields {
        // A carried-over value is still held to the blueprint's type.
        let value = match rules.resolve(key, default, &mut siblings) {
            Some(renamed) => reconcile_field(default, Some(&renamed), rules),
            None => reconcile_field(default, siblings.get(key), rules),
        };
        reconciled.insert(key.clone(), value);
    }
    reconciled
}
