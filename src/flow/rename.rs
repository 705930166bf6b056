// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Field rename rules applied during version reconciliation

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A field that was renamed between blueprint versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRule {
    /// Name the field had in older documents
    pub old_key: String,

    /// Name the field has in the current blueprint
    pub new_key: String,

    /// Carry the stored value over instead of resetting to the default
    #[serde(default)]
    pub retain_existing_value: bool,
}

impl RenameRule {
    pub fn new(old_key: impl Into<String>, new_key: impl Into<String>, retain: bool) -> Self {
        Self {
            old_key: old_key.into(),
            new_key: new_key.into(),
            retain_existing_value: retain,
        }
    }
}

/// Ordered rename rules. The first matching rule wins for each field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenameRules(Vec<RenameRule>);

impl RenameRules {
    pub fn new(rules: Vec<RenameRule>) -> Self {
        Self(rules)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenameRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Resolve a blueprint field through the rename rules.
    ///
    /// Looks for the first rule whose `new_key` is `field` and whose `old_key`
    /// is present among the stored siblings. When one fires, the old key is
    /// removed from `stored` and the value for `field` is returned: the old
    /// stored value if the rule retains it, otherwise `default`. The caller
    /// still reconciles a retained value against `default`. Returns `None`
    /// when no rule applies.
    pub fn resolve(
        &self,
        field: &str,
        default: &Value,
        stored: &mut Map<String, Value>,
    ) -> Option<Value> {
        let rule = self
            .0
            .iter()
            .find(|rule| rule.new_key == field && stored.contains_key(&rule.old_key))?;

        let old_value = stored.remove(&rule.old_key)?;
        tracing::debug!(
            target: "onboard.flow.rename",
            old_key = %rule.old_key,
            new_key = %rule.new_key,
            retain = rule.retain_existing_value,
            "applying rename rule"
        );

        if rule.retain_existing_value {
            Some(old_value)
        } else {
            Some(default.clone())
        }
    }
}

impl From<Vec<RenameRule>> for RenameRules {
    fn from(rules: Vec<RenameRule>) -> Self {
        Self(rules)
    }
}
