// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Flow document initialization command

use serde::Serialize;

use crate::cli::args::{InitArgs, OutputFormat};
use crate::error::Result;
use crate::flow::{FlowType, InitOutcome};

use super::CommandContext;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitReport {
    flow: FlowType,
    outcome: &'static str,
    from_version: Option<String>,
    version: String,
    path: String,
}

/// Run initialization for the resolved flow type
pub fn run(args: &InitArgs, ctx: &CommandContext) -> Result<(FlowType, InitOutcome)> {
    let flow = ctx.flow(args.flow.as_deref());
    let outcome = ctx.service(flow, false).initialize()?;
    Ok((flow, outcome))
}

/// Execute the init command
pub fn execute(args: &InitArgs, ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let (flow, outcome) = run(args, ctx)?;
    let path = ctx.document_path.display().to_string();

    let report = match &outcome {
        InitOutcome::Created { version } => InitReport {
            flow,
            outcome: "created",
            from_version: None,
            version: version.clone(),
            path,
        },
        InitOutcome::Migrated { from, to } => InitReport {
            flow,
            outcome: "migrated",
            from_version: from.clone(),
            version: to.clone(),
            path,
        },
        InitOutcome::Current { version } => InitReport {
            flow,
            outcome: "current",
            from_version: None,
            version: version.clone(),
            path,
        },
    };

    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match outcome {
        InitOutcome::Created { .. } => {
            println!("Created {} flow document v{}", flow, report.version)
        }
        InitOutcome::Migrated { from, .. } => println!(
            "Migrated flow document from v{} to v{}",
            from.as_deref().unwrap_or("?"),
            report.version
        ),
        InitOutcome::Current { .. } => {
            println!("Flow document already at v{}", report.version)
        }
    }
    println!("  {}", report.path);

    Ok(())
}
