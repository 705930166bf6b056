// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::Value;

use super::path::FieldPath;
use super::shape::{is_container, is_empty_container, is_keyed, member, members};
use crate::error::FlowError;

/// Check that every key in `update` also exists in `stored`.
///
/// The merger silently drops unknown keys; strict callers run this first to
/// reject them instead. Only non-empty keyed update values are descended
/// into, and only where the stored counterpart is a non-empty container.
pub fn find_mismatch(update: &Value, stored: &Value) -> Result<(), FlowError> {
    find_mismatch_at(update, stored, &FieldPath::root())
}

fn find_mismatch_at(update: &Value, stored: &Value, path: &FieldPath) -> Result<(), FlowError> {
    if !is_container(stored) {
        return Ok(());
    }

    for (key, value) in members(update) {
        let Some(counterpart) = member(stored, &key) else {
            return Err(FlowError::WrongParamProvided {
                path: path.clone(),
                key,
            });
        };

        if !is_keyed(value) || is_empty_container(counterpart) {
            continue;
        }

        find_mismatch_at(value, counterpart, &path.child(&key))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_keys_pass() {
        let stored = json!({"a": 1, "b": {"c": 2}});
        assert!(find_mismatch(&json!({"a": 5, "b": {"c": 3}}), &stored).is_ok());
    }

    #[test]
    fn test_unknown_top_level_key() {
        let err = find_mismatch(&json!({"b": 2}), &json!({"a": 1})).unwrap_err();
        assert_eq!(
            err,
            FlowError::WrongParamProvided {
                path: FieldPath::root(),
                key: "b".to_string(),
            }
        );
        assert!(err.to_string().ends_with("root => b"));
    }

    #[test]
    fn test_unknown_nested_key_names_parent_path() {
        let stored = json!({"data": {"siteType": {"referTo": "site"}}});
        let update = json!({"data": {"siteType": {"refer": "x"}}});
        let err = find_mismatch(&update, &stored).unwrap_err();
        assert_eq!(
            err,
            FlowError::WrongParamProvided {
                path: FieldPath::root().child("data").child("siteType"),
                key: "refer".to_string(),
            }
        );
    }

    #[test]
    fn test_lists_are_not_descended() {
        let stored = json!({"tags": ["a"]});
        assert!(find_mismatch(&json!({"tags": [{"anything": 1}]}), &stored).is_ok());
    }

    #[test]
    fn test_empty_update_values_are_leaves() {
        let stored = json!({"socialData": {"facebook": ""}});
        assert!(find_mismatch(&json!({"socialData": {}}), &stored).is_ok());
    }

    #[test]
    fn test_empty_stored_counterpart_accepts_anything() {
        let stored = json!({"socialData": {}});
        let update = json!({"socialData": {"twitter": "@me"}});
        assert!(find_mismatch(&update, &stored).is_ok());
    }

    #[test]
    fn test_scalar_stored_counterpart_is_not_checked() {
        let stored = json!({"blogName": ""});
        let update = json!({"blogName": {"nested": true}});
        assert!(find_mismatch(&update, &stored).is_ok());
    }

    #[test]
    fn test_scalar_update_has_no_keys() {
        assert!(find_mismatch(&json!("text"), &json!({"a": 1})).is_ok());
    }
}
