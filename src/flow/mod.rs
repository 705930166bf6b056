// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Onboarding flow document engine
//!
//! Keeps the persisted flow document in step with the blueprint of the
//! running version, and merges wizard submissions into it.
//!
//! ## Components
//!
//! - `shape`: structural classification shared by every walker
//! - `rename`: field renames carried across blueprint versions
//! - `reconcile`: upgrades a stored document to the blueprint's shape
//! - `merge`: applies partial updates with type checking
//! - `validate`: strict check that an update only names known fields
//! - `service`: the read / transform / write lifecycle over a store
//!
//! ## Usage
//!
//! ```rust,ignore
//! use onboard::flow::{Blueprint, FlowMetadata, FlowService, FlowType};
//! use onboard::store::MemoryStore;
//!
//! let service = FlowService::new(
//!     MemoryStore::new(),
//!     Blueprint::current(FlowType::Ecommerce),
//!     FlowMetadata::bundled(),
//! );
//! service.initialize()?;
//! service.apply_update(&serde_json::json!({"data": {"blogName": "My Shop"}}))?;
//! ```

pub mod blueprint;
pub mod document;
pub mod merge;
pub mod path;
pub mod reconcile;
pub mod rename;
pub mod resolver;
pub mod service;
pub mod shape;
pub mod validate;

pub use blueprint::{Blueprint, FlowMetadata, FlowType, BLUEPRINT_VERSION};
pub use document::FlowDocument;
pub use merge::{merge, ExceptionKeys};
pub use path::FieldPath;
pub use reconcile::reconcile;
pub use rename::{RenameRule, RenameRules};
pub use resolver::{CustomerPlan, FlowResolver};
pub use service::{FlowService, InitOutcome};
pub use shape::{classify, Shape, ValueType};
pub use validate::find_mismatch;
