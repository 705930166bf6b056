// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Onboard - flow configuration reconciliation for onboarding wizards.
//!
//! This crate exposes the engine used by the `onboard` CLI (`src/main.rs`):
//! - `flow`: blueprint, reconciliation, update merging and validation
//! - `store`: whole-document persistence behind the `DocumentStore` trait
//! - `config`: user settings for the CLI
//! - `cli`, `commands`: argument parsing and subcommand execution

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod flow;
pub mod store;

pub use error::{FlowError, OnboardError, Result};
