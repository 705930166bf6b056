// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::error::{OnboardError, Result};
use crate::flow::FlowDocument;

use super::DocumentStore;

/// In-memory document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RwLock<Option<FlowDocument>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `document`
    pub fn with_document(document: FlowDocument) -> Self {
        Self {
            document: RwLock::new(Some(document)),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self) -> Result<Option<FlowDocument>> {
        let document = self
            .document
            .read()
            .map_err(|_| OnboardError::Storage("memory store lock poisoned".to_string()))?;
        Ok(document.clone())
    }

    fn write(&self, document: &FlowDocument) -> Result<()> {
        let mut slot = self
            .document
            .write()
            .map_err(|_| OnboardError::Storage("memory store lock poisoned".to_string()))?;
        *slot = Some(document.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
