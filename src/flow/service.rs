// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Flow document lifecycle
//!
//! Every operation is one read, a pure in-memory transformation, and at most
//! one write. A rejected update never reaches the store.

use serde_json::Value;

use super::blueprint::{Blueprint, FlowMetadata};
use super::document::FlowDocument;
use super::merge::merge;
use super::reconcile::reconcile;
use super::validate::find_mismatch;
use crate::error::{FlowError, Result};
use crate::store::DocumentStore;

/// What [`FlowService::initialize`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// No document existed; the blueprint was written
    Created { version: String },
    /// The stored document was reconciled to the blueprint version
    Migrated { from: Option<String>, to: String },
    /// The stored document was already current; nothing was written
    Current { version: String },
}

impl InitOutcome {
    /// Whether a document was written
    pub fn wrote(&self) -> bool {
        !matches!(self, InitOutcome::Current { .. })
    }
}

/// Reconciles and updates the flow document held by a [`DocumentStore`]
pub struct FlowService<S> {
    store: S,
    blueprint: Blueprint,
    metadata: FlowMetadata,
    strict: bool,
}

impl<S: DocumentStore> FlowService<S> {
    pub fn new(store: S, blueprint: Blueprint, metadata: FlowMetadata) -> Self {
        Self {
            store,
            blueprint,
            metadata,
            strict: false,
        }
    }

    /// Reject updates naming unknown fields instead of ignoring them.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored document, if any
    pub fn document(&self) -> Result<Option<FlowDocument>> {
        self.store.read()
    }

    /// Bring the stored document in line with the blueprint.
    ///
    /// Creates the document on first run. If the stored version differs from
    /// the blueprint's, or is missing, the document is reconciled and stamped
    /// with the blueprint version. Otherwise nothing is written.
    pub fn initialize(&self) -> Result<InitOutcome> {
        let target = self.blueprint.version().to_string();

        let Some(stored) = self.store.read()? else {
            self.store.write(&self.blueprint.to_document()?)?;
            tracing::info!(
                target: "onboard.flow.service",
                flow = %self.blueprint.flow(),
                version = %target,
                "flow document created from blueprint"
            );
            return Ok(InitOutcome::Created { version: target });
        };

        if stored.version() == Some(target.as_str()) {
            tracing::debug!(
                target: "onboard.flow.service",
                version = %target,
                "flow document already current"
            );
            return Ok(InitOutcome::Current { version: target });
        }

        let from = stored.version().map(str::to_string);
        let reconciled = reconcile(
            self.blueprint.as_value(),
            &stored.into_value(),
            &self.metadata.rules,
        );
        let mut migrated = FlowDocument::from_value(reconciled)?;
        migrated.set_version(target.clone());
        self.store.write(&migrated)?;

        tracing::info!(
            target: "onboard.flow.service",
            from = from.as_deref().unwrap_or("none"),
            to = %target,
            "flow document reconciled"
        );
        Ok(InitOutcome::Migrated { from, to: target })
    }

    /// Merge a partial update into the stored document and persist it.
    pub fn apply_update(&self, update: &Value) -> Result<FlowDocument> {
        let merged = self.preview_update(update)?;
        self.store.write(&merged)?;
        tracing::debug!(target: "onboard.flow.service", "flow update applied");
        Ok(merged)
    }

    /// Merge a partial update without persisting the result.
    ///
    /// When nothing is stored yet the update is applied to the blueprint
    /// defaults.
    pub fn preview_update(&self, update: &Value) -> Result<FlowDocument> {
        let stored = match self.store.read()? {
            Some(doc) => doc,
            None => self.blueprint.to_document()?,
        };
        let stored = stored.into_value();

        let outcome = if self.strict {
            find_mismatch(update, &stored).and_then(|()| self.merge_into(&stored, update))
        } else {
            self.merge_into(&stored, update)
        };

        match outcome {
            Ok(merged) => FlowDocument::from_value(merged),
            Err(err) => {
                tracing::warn!(
                    target: "onboard.flow.service",
                    code = err.code(),
                    path = %err.path(),
                    field = err.path().leaf().unwrap_or("root"),
                    "flow update rejected: {}",
                    err
                );
                Err(err.into())
            }
        }
    }

    fn merge_into(&self, stored: &Value, update: &Value) -> std::result::Result<Value, FlowError> {
        merge(
            stored,
            self.blueprint.as_value(),
            update,
            &self.metadata.exceptions,
        )
    }
}
