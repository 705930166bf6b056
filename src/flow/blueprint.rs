// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Default flow documents shipped with this version
//!
//! The blueprint is the ground truth for which fields a flow document has.
//! It changes only when the software is upgraded, together with the rename
//! rules that carry old documents forward.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::document::{FlowDocument, CREATED_AT_KEY, VERSION_KEY};
use super::merge::ExceptionKeys;
use super::rename::{RenameRule, RenameRules};
use crate::error::{OnboardError, Result};

/// Version of the bundled blueprint
pub const BLUEPRINT_VERSION: &str = "1.0.3";

/// Onboarding flow variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowType {
    /// Generic site setup
    #[default]
    WpSetup,
    /// Store setup
    Ecommerce,
}

impl FlowType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowType::WpSetup => "wp-setup",
            FlowType::Ecommerce => "ecommerce",
        }
    }

    pub fn all() -> [FlowType; 2] {
        [FlowType::WpSetup, FlowType::Ecommerce]
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FlowType {
    type Err = OnboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "wp-setup" => Ok(FlowType::WpSetup),
            "ecommerce" => Ok(FlowType::Ecommerce),
            other => Err(OnboardError::InvalidInput(format!(
                "unknown flow type '{}'",
                other
            ))),
        }
    }
}

/// Current default flow document for one flow type
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    flow: FlowType,
    document: Value,
}

impl Blueprint {
    /// Build the blueprint for `flow`, stamped with `created_at`.
    pub fn for_flow(flow: FlowType, created_at: i64) -> Self {
        let mut document = base_document();
        document[CREATED_AT_KEY] = json!(created_at);

        if flow == FlowType::Ecommerce {
            document["data"]["topPriority"]["priority1"] = json!("selling");
            document["data"]["siteType"]["referTo"] = json!("business");
        }

        Self { flow, document }
    }

    /// Blueprint for `flow` created now
    pub fn current(flow: FlowType) -> Self {
        Self::for_flow(flow, chrono::Utc::now().timestamp())
    }

    pub fn flow(&self) -> FlowType {
        self.flow
    }

    pub fn version(&self) -> &str {
        self.document
            .get(VERSION_KEY)
            .and_then(Value::as_str)
            .unwrap_or(BLUEPRINT_VERSION)
    }

    pub fn as_value(&self) -> &Value {
        &self.document
    }

    /// A fresh flow document holding the blueprint defaults
    pub fn to_document(&self) -> Result<FlowDocument> {
        FlowDocument::from_value(self.document.clone())
    }
}

/// Migration metadata bundled with the blueprint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowMetadata {
    /// Renames applied while reconciling older documents
    #[serde(default)]
    pub rules: RenameRules,

    /// Fields accepted verbatim by update merges
    #[serde(default)]
    pub exceptions: ExceptionKeys,
}

impl FlowMetadata {
    pub fn bundled() -> Self {
        Self {
            rules: RenameRules::new(vec![
                RenameRule::new("siteLogo-url", "siteLogo", false),
                RenameRule::new("isViewedSteps", "isViewed", true),
            ]),
            exceptions: ["socialData", "typography", "tax"].into_iter().collect(),
        }
    }
}

fn base_document() -> Value {
    json!({
        "version": BLUEPRINT_VERSION,
        "createdAt": 0,
        "isViewed": [],
        "currentStep": "",
        "hasExited": 0,
        "isComplete": 0,
        "data": {
            "siteType": {
                "referTo": "site",
                "primary": "",
                "secondary": ""
            },
            "wpComfortLevel": "0",
            "topPriority": {
                "priority1": ""
            },
            "blogName": "",
            "blogDescription": "",
            "siteLogo": [],
            "comingSoon": false,
            "socialData": {},
            "siteFeatures": [],
            "customDesign": false,
            "partHeader": "",
            "palette": [],
            "colorStyle": "",
            "typography": {},
            "chapters": []
        },
        "storeDetails": {
            "emailAddress": "",
            "productInfo": {
                "product_count": "",
                "product_types": []
            },
            "tax": {},
            "address": {
                "address": "",
                "city": "",
                "state": "",
                "zip": "",
                "country": ""
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_type_round_trips_through_str() {
        for flow in FlowType::all() {
            assert_eq!(flow.as_str().parse::<FlowType>().unwrap(), flow);
        }
        assert!("retail".parse::<FlowType>().is_err());
    }

    #[test]
    fn test_flow_type_serde_names() {
        assert_eq!(serde_json::to_string(&FlowType::WpSetup).unwrap(), "\"wp-setup\"");
        let parsed: FlowType = serde_json::from_str("\"ecommerce\"").unwrap();
        assert_eq!(parsed, FlowType::Ecommerce);
    }

    #[test]
    fn test_default_blueprint() {
        let blueprint = Blueprint::for_flow(FlowType::WpSetup, 42);
        let doc = blueprint.as_value();
        assert_eq!(blueprint.version(), BLUEPRINT_VERSION);
        assert_eq!(doc["createdAt"], 42);
        assert_eq!(doc["data"]["siteType"]["referTo"], "site");
        assert_eq!(doc["data"]["topPriority"]["priority1"], "");
    }

    #[test]
    fn test_ecommerce_overrides_two_leaves() {
        let store = Blueprint::for_flow(FlowType::Ecommerce, 42);
        let site = Blueprint::for_flow(FlowType::WpSetup, 42);

        assert_eq!(store.as_value()["data"]["topPriority"]["priority1"], "selling");
        assert_eq!(store.as_value()["data"]["siteType"]["referTo"], "business");

        let mut reverted = store.as_value().clone();
        reverted["data"]["topPriority"]["priority1"] = json!("");
        reverted["data"]["siteType"]["referTo"] = json!("site");
        assert_eq!(&reverted, site.as_value());
    }

    #[test]
    fn test_to_document() {
        let doc = Blueprint::for_flow(FlowType::WpSetup, 7).to_document().unwrap();
        assert_eq!(doc.version(), Some(BLUEPRINT_VERSION));
        assert_eq!(doc.created_at(), Some(7));
    }

    #[test]
    fn test_bundled_metadata() {
        let meta = FlowMetadata::bundled();
        assert_eq!(meta.rules.len(), 2);
        assert!(meta.exceptions.contains("socialData"));
        assert!(!meta.exceptions.contains("blogName"));
    }
}
