// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::json;
use tempfile::TempDir;

use onboard::flow::{
    Blueprint, FlowDocument, FlowMetadata, FlowService, FlowType, InitOutcome, BLUEPRINT_VERSION,
};
use onboard::store::{DocumentStore, JsonFileStore, MemoryStore};
use onboard::{FlowError, OnboardError};

fn file_service(temp_dir: &TempDir, flow: FlowType) -> FlowService<JsonFileStore> {
    FlowService::new(
        JsonFileStore::new(temp_dir.path().join("flow.json")),
        Blueprint::for_flow(flow, 1_700_000_000),
        FlowMetadata::bundled(),
    )
}

#[test]
fn test_version_stamped_once() {
    let store = MemoryStore::with_document(
        FlowDocument::from_value(json!({"version": "1.0.1", "currentStep": "/step/2"})).unwrap(),
    );
    let service = FlowService::new(
        &store,
        Blueprint::for_flow(FlowType::WpSetup, 1),
        FlowMetadata::bundled(),
    );

    assert!(matches!(
        service.initialize().unwrap(),
        InitOutcome::Migrated { .. }
    ));
    assert_eq!(
        service.initialize().unwrap(),
        InitOutcome::Current {
            version: BLUEPRINT_VERSION.to_string()
        }
    );

    let doc = store.read().unwrap().unwrap();
    assert_eq!(doc.version(), Some(BLUEPRINT_VERSION));
    assert_eq!(doc.get("currentStep"), Some(&json!("/step/2")));
    assert_eq!(store.write_count(), 1);
}

#[test]
fn test_file_lifecycle_for_store_flow() {
    let temp_dir = TempDir::new().unwrap();
    let service = file_service(&temp_dir, FlowType::Ecommerce);

    assert!(matches!(
        service.initialize().unwrap(),
        InitOutcome::Created { .. }
    ));

    service
        .apply_update(&json!({
            "storeDetails": {
                "emailAddress": "owner@example.com",
                "address": {"city": "Lisbon", "country": "PT"}
            }
        }))
        .unwrap();

    let reopened = file_service(&temp_dir, FlowType::Ecommerce);
    let doc = reopened.document().unwrap().unwrap();
    let store = doc.get("storeDetails").unwrap();
    assert_eq!(store["emailAddress"], "owner@example.com");
    assert_eq!(store["address"]["city"], "Lisbon");
    assert_eq!(store["address"]["zip"], "");
    assert_eq!(doc.get("data").unwrap()["topPriority"]["priority1"], "selling");
}

#[test]
fn test_rejected_update_leaves_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let service = file_service(&temp_dir, FlowType::WpSetup);
    service.initialize().unwrap();
    let path = temp_dir.path().join("flow.json");
    let before = std::fs::read_to_string(&path).unwrap();

    let err = service
        .apply_update(&json!({"data": {"blogName": "New", "topPriority": ["x"]}}))
        .unwrap_err();

    assert!(matches!(
        err,
        OnboardError::Flow(FlowError::WrongParamType { .. })
    ));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_upgrade_then_update_round() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("flow.json"),
        r#"{
            "version": "1.0.0",
            "createdAt": 1600000000,
            "isViewedSteps": {"/step/1": true},
            "data": {"blogName": "Legacy", "siteType": {"referTo": "personal"}}
        }"#,
    )
    .unwrap();

    let service = file_service(&temp_dir, FlowType::WpSetup).with_strict(true);
    let outcome = service.initialize().unwrap();
    assert_eq!(
        outcome,
        InitOutcome::Migrated {
            from: Some("1.0.0".to_string()),
            to: BLUEPRINT_VERSION.to_string()
        }
    );

    let doc = service
        .apply_update(&json!({"data": {"siteType": {"primary": "food"}}}))
        .unwrap();
    assert_eq!(doc.created_at(), Some(1_600_000_000));
    assert_eq!(doc.get("isViewed"), Some(&json!({"/step/1": true})));
    assert_eq!(doc.get("data").unwrap()["siteType"]["referTo"], "personal");
    assert_eq!(doc.get("data").unwrap()["siteType"]["primary"], "food");

    let err = service
        .apply_update(&json!({"isViewedSteps": {}}))
        .unwrap_err();
    assert!(matches!(
        err,
        OnboardError::Flow(FlowError::WrongParamProvided { .. })
    ));
}

#[test]
fn test_corrupt_document_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("flow.json"), "{ broken").unwrap();

    let err = file_service(&temp_dir, FlowType::WpSetup)
        .initialize()
        .unwrap_err();
    assert!(matches!(err, OnboardError::Storage(_)));
}
