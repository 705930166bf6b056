// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Onboard
//!
//! `FlowError` covers rejected flow updates. `OnboardError` wraps it together
//! with the IO, JSON and configuration failures around it.

use thiserror::Error;

use crate::flow::{FieldPath, ValueType};

/// Main error type for Onboard operations
#[derive(Error, Debug)]
pub enum OnboardError {
    /// Rejected flow update
    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored document could not be used
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Validation failures raised while merging an update into a flow document.
///
/// These are never transient; the same input always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// Offered value has the wrong runtime type for the field
    #[error("Wrong Parameter Type Provided : {path} => {offered}. Expected: {expected}")]
    WrongParamType {
        path: FieldPath,
        offered: ValueType,
        expected: ValueType,
    },

    /// Update names a field the stored document does not have
    #[error("Wrong Parameter Provided : {path} => {key}")]
    WrongParamProvided { path: FieldPath, key: String },
}

impl FlowError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            FlowError::WrongParamType { .. } => "wrong_param_type_provided",
            FlowError::WrongParamProvided { .. } => "wrong_param_provided",
        }
    }

    /// HTTP status a transport layer should answer with
    pub fn status(&self) -> u16 {
        400
    }

    /// Path of the offending field
    pub fn path(&self) -> &FieldPath {
        match self {
            FlowError::WrongParamType { path, .. } => path,
            FlowError::WrongParamProvided { path, .. } => path,
        }
    }
}

/// Result type alias for Onboard operations
pub type Result<T> = std::result::Result<T, OnboardError>;
