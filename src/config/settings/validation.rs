// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use crate::error::{OnboardError, Result};
use crate::flow::{CustomerPlan, FlowResolver, FlowType};

use super::Settings;

impl Settings {
    /// Check settings that serde alone cannot.
    pub fn validate(&self) -> Result<()> {
        if self.storage.document_path.as_os_str().is_empty() {
            return Err(OnboardError::Config(
                "storage.document_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolver falling back to the configured default flow.
    pub fn flow_resolver(&self) -> FlowResolver {
        FlowResolver::new(self.flow.default_flow)
    }

    /// Resolve the flow type for this process.
    ///
    /// Priority: explicit flag > customer plan from the environment >
    /// configured default.
    pub fn resolve_flow(&self, requested: Option<&str>) -> FlowType {
        let plan = CustomerPlan::from_env();
        self.flow_resolver().resolve(requested, plan.as_ref())
    }
}
