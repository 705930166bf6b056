// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::merge;
use super::Settings;

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        Self::onboard_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(
                target: "onboard.config",
                path = %path.display(),
                "no settings file, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to `path`, layered over whatever the file already holds.
    ///
    /// Keys this build does not know about survive the write. An unreadable
    /// existing file that is not valid JSON is replaced; one that cannot be
    /// read is left alone and the read error returned.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let current = serde_json::to_value(self)?;
        if !path.exists() {
            return write_pretty(path, &current);
        }

        let text = std::fs::read_to_string(path)?;
        let layered = match serde_json::from_str(&text) {
            Ok(existing) => merge::deep_merge(existing, current),
            Err(_) => current,
        };
        write_pretty(path, &layered)
    }

    /// Save settings to `path`, discarding anything else in the file.
    pub fn save_to_clean(&self, path: &Path) -> Result<()> {
        write_pretty(path, &serde_json::to_value(self)?)
    }

    /// Get the onboard home directory (~/.onboard or $ONBOARD_HOME).
    pub fn onboard_home() -> PathBuf {
        if let Ok(home) = std::env::var("ONBOARD_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".onboard")
    }
}

fn write_pretty(path: &Path, value: &serde_json::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    tracing::debug!(target: "onboard.config", path = %path.display(), "settings saved");
    Ok(())
}
