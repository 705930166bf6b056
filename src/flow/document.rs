// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{OnboardError, Result};

/// Top-level key holding the document's schema version
pub const VERSION_KEY: &str = "version";

/// Top-level key holding the creation timestamp (Unix seconds)
pub const CREATED_AT_KEY: &str = "createdAt";

/// A persisted onboarding flow document.
///
/// Always a JSON object. Everything apart from `version` and `createdAt` is
/// open-ended and described by the blueprint it was created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowDocument(Map<String, Value>);

impl FlowDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(OnboardError::Storage(format!(
                "flow document must be a JSON object, found {}",
                super::ValueType::of(&other)
            ))),
        }
    }

    /// Declared schema version, if present and a string
    pub fn version(&self) -> Option<&str> {
        self.0.get(VERSION_KEY).and_then(Value::as_str)
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.0
            .insert(VERSION_KEY.to_string(), Value::String(version.into()));
    }

    /// Creation timestamp, if present and an integer
    pub fn created_at(&self) -> Option<i64> {
        self.0.get(CREATED_AT_KEY).and_then(Value::as_i64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<FlowDocument> for Value {
    fn from(doc: FlowDocument) -> Self {
        doc.into_value()
    }
}
