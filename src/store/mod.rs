// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Flow document storage
//!
//! The engine only ever reads a whole document and writes a whole document
//! back, so storage is a two-method trait. There is no locking across the
//! read and the write; concurrent submissions are last-write-wins.
//!
//! ## Backends
//!
//! - [`MemoryStore`]: in-process, for tests and embedding
//! - [`JsonFileStore`]: one pretty-printed JSON file, replaced atomically

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::flow::FlowDocument;

/// Whole-document persistence for the flow document
pub trait DocumentStore {
    /// Fetch the stored document, or `None` if nothing has been stored yet.
    fn read(&self) -> Result<Option<FlowDocument>>;

    /// Replace the stored document.
    fn write(&self, document: &FlowDocument) -> Result<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    fn read(&self) -> Result<Option<FlowDocument>> {
        (**self).read()
    }

    fn write(&self, document: &FlowDocument) -> Result<()> {
        (**self).write(document)
    }
}
