// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for Onboard
//!
//! Handles loading and saving settings from ~/.onboard/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::flow::FlowType;

mod io;
mod merge;
mod validation;

/// Main settings structure, stored in ~/.onboard/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Where the flow document lives
    #[serde(default)]
    pub storage: StorageConfig,

    /// Flow selection and update policy
    #[serde(default)]
    pub flow: FlowConfig,
}

/// Flow document storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the flow document JSON file
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,
}

/// Flow behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FlowConfig {
    /// Flow used when neither the request nor the customer plan picks one
    #[serde(default)]
    pub default_flow: FlowType,

    /// Reject updates that name fields the stored document does not have
    #[serde(default)]
    pub strict_updates: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            document_path: default_document_path(),
        }
    }
}

fn default_document_path() -> PathBuf {
    Settings::onboard_home().join("flow.json")
}
