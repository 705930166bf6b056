// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each subcommand has a `run` function that does the work and returns
//! its result, and an `execute` function that prints it in the requested
//! format.

pub mod blueprint;
pub mod init;
pub mod show;
pub mod update;

use std::path::PathBuf;

use crate::config::Settings;
use crate::flow::{Blueprint, FlowMetadata, FlowService, FlowType};
use crate::store::JsonFileStore;

/// Everything a subcommand needs from the environment
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub settings: Settings,
    pub document_path: PathBuf,
}

impl CommandContext {
    /// Build a context, letting `document` override the configured path.
    pub fn new(settings: Settings, document: Option<PathBuf>) -> Self {
        let document_path = document.unwrap_or_else(|| settings.storage.document_path.clone());
        Self {
            settings,
            document_path,
        }
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.document_path)
    }

    /// Flow type for this invocation
    pub fn flow(&self, requested: Option<&str>) -> FlowType {
        self.settings.resolve_flow(requested)
    }

    /// Service over the configured document for `flow`
    pub fn service(&self, flow: FlowType, strict: bool) -> FlowService<JsonFileStore> {
        FlowService::new(self.store(), Blueprint::current(flow), FlowMetadata::bundled())
            .with_strict(strict || self.settings.flow.strict_updates)
    }
}
