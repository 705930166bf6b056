// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Apply a partial update to the flow document

use serde_json::Value;

use crate::cli::args::{OutputFormat, UpdateArgs};
use crate::error::{OnboardError, Result};
use crate::flow::FlowDocument;

use super::CommandContext;

/// Read the update payload from the inline argument or the file.
pub fn read_update(args: &UpdateArgs) -> Result<Value> {
    let text = match (&args.json, &args.file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            return Err(OnboardError::InvalidInput(
                "an update is required, inline or with --file".to_string(),
            ))
        }
    };

    serde_json::from_str(&text)
        .map_err(|e| OnboardError::InvalidInput(format!("update is not valid JSON: {}", e)))
}

/// Merge the update, persisting it unless this is a dry run
pub fn run(args: &UpdateArgs, ctx: &CommandContext) -> Result<FlowDocument> {
    let update = read_update(args)?;
    let service = ctx.service(ctx.flow(args.flow.as_deref()), args.strict);

    if args.dry_run {
        service.preview_update(&update)
    } else {
        service.apply_update(&update)
    }
}

/// Execute the update command
pub fn execute(args: &UpdateArgs, ctx: &CommandContext, format: &OutputFormat) -> Result<()> {
    let document = run(args, ctx)?;

    if matches!(format, OutputFormat::Text) {
        if args.dry_run {
            println!("Dry run, nothing saved. Merged document:");
        } else {
            println!("Updated {}", ctx.document_path.display());
        }
    }
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::FlowError;
    use crate::store::DocumentStore;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> CommandContext {
        CommandContext::new(Settings::default(), Some(temp_dir.path().join("flow.json")))
    }

    fn inline(json: &str) -> UpdateArgs {
        UpdateArgs {
            json: Some(json.to_string()),
            flow: Some("wp-setup".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_read_update_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("patch.json");
        std::fs::write(&path, r#"{"currentStep": "/step/2"}"#).unwrap();

        let args = UpdateArgs {
            file: Some(path),
            ..Default::default()
        };
        assert_eq!(read_update(&args).unwrap()["currentStep"], "/step/2");
    }

    #[test]
    fn test_read_update_invalid_json() {
        let err = read_update(&inline("{nope")).unwrap_err();
        assert!(matches!(err, OnboardError::InvalidInput(_)));
    }

    #[test]
    fn test_run_applies_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let doc = run(&inline(r#"{"data": {"blogName": "Bakery"}}"#), &ctx).unwrap();
        assert_eq!(doc.get("data").unwrap()["blogName"], "Bakery");

        let stored = ctx.store().read().unwrap().unwrap();
        assert_eq!(stored, doc);
    }

    #[test]
    fn test_dry_run_does_not_persist() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let mut args = inline(r#"{"currentStep": "/step/3"}"#);
        args.dry_run = true;
        run(&args, &ctx).unwrap();

        assert!(!ctx.document_path.exists());
    }

    #[test]
    fn test_type_error_surfaces() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let err = run(&inline(r#"{"isComplete": "done"}"#), &ctx).unwrap_err();
        assert!(matches!(
            err,
            OnboardError::Flow(FlowError::WrongParamType { .. })
        ));
        assert!(!ctx.document_path.exists());
    }

    #[test]
    fn test_strict_flag_rejects_unknown_field() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let mut args = inline(r#"{"unknownField": 1}"#);
        args.strict = true;
        let err = run(&args, &ctx).unwrap_err();
        assert!(matches!(
            err,
            OnboardError::Flow(FlowError::WrongParamProvided { .. })
        ));
    }
}
