// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Print the stored flow document

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::flow::FlowDocument;
use crate::store::DocumentStore;

use super::CommandContext;

pub fn run(ctx: &CommandContext) -> Result<Option<FlowDocument>> {
    ctx.store().read()
}

/// Execute the show command
pub fn execute(ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let document = run(ctx)?;

    match (document, format) {
        (Some(doc), _) => println!("{}", serde_json::to_string_pretty(&doc)?),
        (None, OutputFormat::Json) => println!("null"),
        (None, OutputFormat::Text) => {
            println!(
                "No flow document at {}. Run 'onboard init' to create one.",
                ctx.document_path.display()
            );
        }
    }

    Ok(())
}
