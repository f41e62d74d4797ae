//! Template flow catalog.
//!
//! Each template is an ordered list of abstract steps. Order is significant:
//! the n-th step becomes the n-th node of the generated pipeline.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::mapper::StepKind;
use super::mapper::StepKind::{Approval, Build, Deploy, Source, Test};
use crate::state::DeploymentType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    /// Unique within its flow.
    pub id: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: StepKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub key: &'static str,
    pub name: &'static str,
    pub deployment_type: DeploymentType,
    pub steps: &'static [StepDescriptor],
}

const fn step(id: &'static str, title: &'static str, kind: StepKind) -> StepDescriptor {
    StepDescriptor { id, title, kind }
}

static TEMPLATES: &[Template] = &[
    Template {
        key: "sap-integration-suite",
        name: "SAP Integration Suite",
        deployment_type: DeploymentType::Integration,
        steps: &[
            step("checkout", "Checkout iFlow Sources", Source),
            step("validate", "Validate Integration Artifacts", Build),
            step("integration-test", "Run Integration Tests", Test),
            step("package", "Package iFlow", Build),
            step("approval", "Release Approval", Approval),
            step("deploy-dev", "Deploy to Dev Tenant", Deploy),
            step("deploy-prod", "Deploy to Prod Tenant", Deploy),
        ],
    },
    Template {
        key: "api-management",
        name: "API Management",
        deployment_type: DeploymentType::Integration,
        steps: &[
            step("checkout", "Checkout API Proxies", Source),
            step("lint", "Lint API Specifications", Build),
            step("contract-test", "Run Contract Tests", Test),
            step("bundle", "Bundle API Proxies", Build),
            step("approval", "API Owner Approval", Approval),
            step("deploy", "Deploy to API Portal", Deploy),
        ],
    },
    Template {
        key: "fiori-app",
        name: "SAP Fiori Application",
        deployment_type: DeploymentType::Extension,
        steps: &[
            step("clone", "Clone Repository", Source),
            step("install", "Install Dependencies", Build),
            step("unit-test", "Run Unit Tests", Test),
            step("bundle", "Build MTA Archive", Build),
            step("approval", "Approval Gate", Approval),
            step("deploy", "Deploy to SAP BTP", Deploy),
        ],
    },
    Template {
        key: "abap-cloud",
        name: "ABAP Cloud",
        deployment_type: DeploymentType::Extension,
        steps: &[
            step("pull", "Pull from gCTS", Source),
            step("atc", "Run ATC Checks", Test),
            step("abap-unit", "Run ABAP Unit Tests", Test),
            step("transport", "Assemble Transport", Build),
            step("approval", "Transport Approval", Approval),
            step("import-qa", "Import to QA System", Deploy),
            step("import-prod", "Import to Production", Deploy),
        ],
    },
    Template {
        key: "cap-application",
        name: "CAP Application",
        deployment_type: DeploymentType::Extension,
        steps: &[
            step("checkout", "Checkout Sources", Source),
            step("install", "Install Dependencies", Build),
            step("lint", "Run Linter", Test),
            step("unit-test", "Run Unit Tests", Test),
            step("mta-build", "Build MTA Archive", Build),
            step("security-scan", "Security Scan", Test),
            step("approval", "Release Approval", Approval),
            step("deploy", "Deploy to Cloud Foundry", Deploy),
        ],
    },
    Template {
        key: "btp-extension",
        name: "SAP BTP Extension",
        deployment_type: DeploymentType::Extension,
        steps: &[
            step("checkout", "Checkout Sources", Source),
            step("build", "Build Extension", Build),
            step("test", "Run Tests", Test),
            step("approval", "Approval Gate", Approval),
            step("deploy-staging", "Deploy to Staging", Deploy),
            step("deploy-prod", "Deploy to Production", Deploy),
        ],
    },
    Template {
        key: "mobile-services",
        name: "SAP Mobile Services",
        deployment_type: DeploymentType::Extension,
        steps: &[
            step("checkout", "Checkout App Sources", Source),
            step("build", "Build Mobile App", Build),
            step("ui-test", "Run UI Tests", Test),
            step("sign", "Sign App Package", Build),
            step("approval", "Store Release Approval", Approval),
            step("deploy", "Publish to Mobile Services", Deploy),
        ],
    },
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static Template>> =
    LazyLock::new(|| TEMPLATES.iter().map(|t| (t.key, t)).collect());

/// Every template in declaration order.
pub fn templates() -> &'static [Template] {
    TEMPLATES
}

pub fn template_keys() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|t| t.key)
}

pub fn template(key: &str) -> Option<&'static Template> {
    BY_KEY.get(key).copied()
}

/// Ordered steps of a template. Unknown keys yield an empty flow.
pub fn flow_for(key: &str) -> &'static [StepDescriptor] {
    template(key).map(|t| t.steps).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fiori_app_flow() {
        let kinds: Vec<StepKind> = flow_for("fiori-app").iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [Source, Build, Test, Build, Approval, Deploy]);
    }

    #[test]
    fn unknown_key_is_empty() {
        assert!(flow_for("does-not-exist").is_empty());
        assert!(flow_for("").is_empty());
        assert!(template("Fiori-App").is_none());
    }

    #[test]
    fn keys_are_unique() {
        assert_eq!(BY_KEY.len(), TEMPLATES.len());
    }

    #[test]
    fn step_serializes_kind_as_type() {
        let json = serde_json::to_value(&flow_for("fiori-app")[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "clone", "title": "Clone Repository", "type": "source" })
        );
    }
}
