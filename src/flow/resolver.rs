// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Choosing which flow variant applies

use super::blueprint::FlowType;

/// Environment variable carrying the customer's plan type
pub const PLAN_TYPE_ENV: &str = "ONBOARD_PLAN_TYPE";

/// Environment variable carrying the customer's plan subtype
pub const PLAN_SUBTYPE_ENV: &str = "ONBOARD_PLAN_SUBTYPE";

/// Hosting plan signals about the customer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPlan {
    pub plan_type: Option<String>,
    pub plan_subtype: Option<String>,
}

impl CustomerPlan {
    /// Read plan signals from the environment. `None` when neither is set.
    pub fn from_env() -> Option<Self> {
        Self::from_env_vars(PLAN_TYPE_ENV, PLAN_SUBTYPE_ENV)
    }

    /// Read plan signals from the named environment variables.
    pub fn from_env_vars(type_var: &str, subtype_var: &str) -> Option<Self> {
        let plan = Self {
            plan_type: non_empty_env(type_var),
            plan_subtype: non_empty_env(subtype_var),
        };
        if plan.plan_type.is_none() && plan.plan_subtype.is_none() {
            None
        } else {
            Some(plan)
        }
    }

    /// Flow implied by the plan, if any
    pub fn flow(&self) -> Option<FlowType> {
        let is_store_type = self.plan_type.as_deref() == Some("ecommerce");
        let is_store_subtype = self
            .plan_subtype
            .as_deref()
            .is_some_and(|subtype| subtype.starts_with("wc_"));

        if is_store_type || is_store_subtype {
            Some(FlowType::Ecommerce)
        } else {
            None
        }
    }
}

/// Resolves the flow type from request and customer signals
#[derive(Debug, Clone, Default)]
pub struct FlowResolver {
    fallback: FlowType,
}

impl FlowResolver {
    pub fn new(fallback: FlowType) -> Self {
        Self { fallback }
    }

    /// Pick the flow type.
    ///
    /// Priority: explicit request parameter > customer plan > fallback.
    /// An unrecognized parameter is ignored rather than rejected.
    pub fn resolve(&self, param: Option<&str>, plan: Option<&CustomerPlan>) -> FlowType {
        if let Some(flow) = param.and_then(|p| p.parse::<FlowType>().ok()) {
            return flow;
        }

        if let Some(flow) = plan.and_then(CustomerPlan::flow) {
            return flow;
        }

        self.fallback
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
