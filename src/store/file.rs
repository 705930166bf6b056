// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::{OnboardError, Result};
use crate::flow::FlowDocument;

use super::DocumentStore;

/// Stores the flow document as a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "flow.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DocumentStore for JsonFileStore {
    fn read(&self) -> Result<Option<FlowDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            OnboardError::Storage(format!(
                "failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;
        FlowDocument::from_value(value).map(Some)
    }

    fn write(&self, document: &FlowDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Write beside the target and rename over it, so readers only ever
        // see a complete document.
        let content = serde_json::to_string_pretty(document)?;
        let temp = self.temp_path();
        std::fs::write(&temp, &content)?;
        std::fs::rename(&temp, &self.path)?;

        tracing::debug!(
            target: "onboard.store",
            path = %self.path.display(),
            bytes = content.len(),
            "flow document written"
        );
        Ok(())
    }
}
