// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for Onboard.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Onboard - keep onboarding flow documents in sync with their blueprint
#[derive(Parser, Debug)]
#[command(name = "onboard")]
#[command(version, about = "Keep onboarding flow documents in sync with their blueprint")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Flow document path (overrides settings)
    #[arg(long, global = true)]
    pub document: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or reconcile the flow document
    Init(InitArgs),

    /// Print the stored flow document
    Show,

    /// Merge a partial update into the flow document
    Update(UpdateArgs),

    /// Print the blueprint for a flow type
    Blueprint(BlueprintArgs),
}

/// Arguments for the init subcommand
#[derive(clap::Args, Debug, Default)]
pub struct InitArgs {
    /// Flow type (wp-setup, ecommerce)
    #[arg(long)]
    pub flow: Option<String>,
}

/// Arguments for the update subcommand
#[derive(clap::Args, Debug, Default)]
pub struct UpdateArgs {
    /// Update as inline JSON
    #[arg(conflicts_with = "file", required_unless_present = "file")]
    pub json: Option<String>,

    /// Read the update from a JSON file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Reject fields that the stored document does not have
    #[arg(long)]
    pub strict: bool,

    /// Show the merged document without saving it
    #[arg(long)]
    pub dry_run: bool,

    /// Flow type (wp-setup, ecommerce)
    #[arg(long)]
    pub flow: Option<String>,
}

/// Arguments for the blueprint subcommand
#[derive(clap::Args, Debug, Default)]
pub struct BlueprintArgs {
    /// Flow type (wp-setup, ecommerce)
    #[arg(long)]
    pub flow: Option<String>,
}

/// Output format for responses
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
