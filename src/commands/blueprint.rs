// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Print the blueprint for a flow type

use crate::cli::args::{BlueprintArgs, OutputFormat};
use crate::error::Result;
use crate::flow::Blueprint;

use super::CommandContext;

/// Execute the blueprint command
pub fn execute(args: &BlueprintArgs, ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let blueprint = Blueprint::current(ctx.flow(args.flow.as_deref()));

    if matches!(format, OutputFormat::Text) {
        println!("# {} blueprint v{}", blueprint.flow(), blueprint.version());
    }
    println!("{}", serde_json::to_string_pretty(blueprint.as_value())?);

    Ok(())
}
