//! Canvas node vocabulary.
//!
//! Node type ids are shared with the dashboard's canvas renderer:
//! `node_*` for environments, `<category>_<tool>` for connectors,
//! `approval_*` for gates, and `note`/`comment` for annotations.
//! Inside the crate a node type is always a [`NodeType`]; raw strings are
//! only accepted at the boundary through [`NodeType::from_str`] and
//! [`label_for`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::tools::lookup_tool;
use crate::error::ParseError;

/// Label rendered for node type ids the vocabulary does not declare.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum NodeType {
    // Environments
    NodeDev,
    NodeQa,
    NodeStaging,
    NodeProd,

    // Plan
    PlanJira,
    PlanTrello,
    // Code
    CodeGithub,
    CodeGitlab,
    CodeBitbucket,
    // Build
    BuildJenkins,
    BuildGithubActions,
    BuildMaven,
    // Test
    TestJest,
    TestSelenium,
    TestCypress,
    TestSonarqube,
    // Release
    ReleaseArgocd,
    ReleaseSpinnaker,
    ReleaseTransportManagement,
    // Deploy
    DeployKubernetes,
    DeployDocker,
    DeployCloudFoundry,
    DeploySapBtp,

    // Approvals
    ApprovalManual,
    ApprovalAutomated,
    ApprovalQualityGate,

    // Annotations
    Note,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "family", content = "category", rename_all = "camelCase")]
pub enum NodeFamily {
    Environment,
    Connector(Category),
    Approval,
    Annotation,
}

impl NodeType {
    pub const ALL: [NodeType; 28] = [
        NodeType::NodeDev,
        NodeType::NodeQa,
        NodeType::NodeStaging,
        NodeType::NodeProd,
        NodeType::PlanJira,
        NodeType::PlanTrello,
        NodeType::CodeGithub,
        NodeType::CodeGitlab,
        NodeType::CodeBitbucket,
        NodeType::BuildJenkins,
        NodeType::BuildGithubActions,
        NodeType::BuildMaven,
        NodeType::TestJest,
        NodeType::TestSelenium,
        NodeType::TestCypress,
        NodeType::TestSonarqube,
        NodeType::ReleaseArgocd,
        NodeType::ReleaseSpinnaker,
        NodeType::ReleaseTransportManagement,
        NodeType::DeployKubernetes,
        NodeType::DeployDocker,
        NodeType::DeployCloudFoundry,
        NodeType::DeploySapBtp,
        NodeType::ApprovalManual,
        NodeType::ApprovalAutomated,
        NodeType::ApprovalQualityGate,
        NodeType::Note,
        NodeType::Comment,
    ];

    /// Wire id understood by the canvas renderer.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::NodeDev => "node_dev",
            NodeType::NodeQa => "node_qa",
            NodeType::NodeStaging => "node_staging",
            NodeType::NodeProd => "node_prod",
            NodeType::PlanJira => "plan_jira",
            NodeType::PlanTrello => "plan_trello",
            NodeType::CodeGithub => "code_github",
            NodeType::CodeGitlab => "code_gitlab",
            NodeType::CodeBitbucket => "code_bitbucket",
            NodeType::BuildJenkins => "build_jenkins",
            NodeType::BuildGithubActions => "build_github_actions",
            NodeType::BuildMaven => "build_maven",
            NodeType::TestJest => "test_jest",
            NodeType::TestSelenium => "test_selenium",
            NodeType::TestCypress => "test_cypress",
            NodeType::TestSonarqube => "test_sonarqube",
            NodeType::ReleaseArgocd => "release_argocd",
            NodeType::ReleaseSpinnaker => "release_spinnaker",
            NodeType::ReleaseTransportManagement => "release_transport_management",
            NodeType::DeployKubernetes => "deploy_kubernetes",
            NodeType::DeployDocker => "deploy_docker",
            NodeType::DeployCloudFoundry => "deploy_cloud_foundry",
            NodeType::DeploySapBtp => "deploy_sap_btp",
            NodeType::ApprovalManual => "approval_manual",
            NodeType::ApprovalAutomated => "approval_automated",
            NodeType::ApprovalQualityGate => "approval_quality_gate",
            NodeType::Note => "note",
            NodeType::Comment => "comment",
        }
    }

    /// Human-readable label shown on the node header.
    pub fn label(&self) -> &'static str {
        match self {
            NodeType::NodeDev => "Development",
            NodeType::NodeQa => "Quality Assurance",
            NodeType::NodeStaging => "Staging",
            NodeType::NodeProd => "Production",
            NodeType::ApprovalManual => "Manual Approval",
            NodeType::ApprovalAutomated => "Automated Approval",
            NodeType::ApprovalQualityGate => "Quality Gate",
            NodeType::Note => "Note",
            NodeType::Comment => "Comment",
            // Connectors are labelled with their tool name.
            connector => connector.tool_name().unwrap_or(UNKNOWN_LABEL),
        }
    }

    pub fn family(&self) -> NodeFamily {
        match self {
            NodeType::NodeDev | NodeType::NodeQa | NodeType::NodeStaging | NodeType::NodeProd => {
                NodeFamily::Environment
            }
            NodeType::PlanJira | NodeType::PlanTrello => NodeFamily::Connector(Category::Plan),
            NodeType::CodeGithub | NodeType::CodeGitlab | NodeType::CodeBitbucket => {
                NodeFamily::Connector(Category::Code)
            }
            NodeType::BuildJenkins | NodeType::BuildGithubActions | NodeType::BuildMaven => {
                NodeFamily::Connector(Category::Build)
            }
            NodeType::TestJest
            | NodeType::TestSelenium
            | NodeType::TestCypress
            | NodeType::TestSonarqube => NodeFamily::Connector(Category::Test),
            NodeType::ReleaseArgocd
            | NodeType::ReleaseSpinnaker
            | NodeType::ReleaseTransportManagement => NodeFamily::Connector(Category::Release),
            NodeType::DeployKubernetes
            | NodeType::DeployDocker
            | NodeType::DeployCloudFoundry
            | NodeType::DeploySapBtp => NodeFamily::Connector(Category::Deploy),
            NodeType::ApprovalManual
            | NodeType::ApprovalAutomated
            | NodeType::ApprovalQualityGate => NodeFamily::Approval,
            NodeType::Note | NodeType::Comment => NodeFamily::Annotation,
        }
    }

    /// Category of a connector node, `None` for every other family.
    pub fn category(&self) -> Option<Category> {
        match self.family() {
            NodeFamily::Connector(category) => Some(category),
            _ => None,
        }
    }

    /// Registry name of the tool a connector node stands for.
    pub fn tool_name(&self) -> Option<&'static str> {
        let name = match self {
            NodeType::PlanJira => "Jira",
            NodeType::PlanTrello => "Trello",
            NodeType::CodeGithub => "GitHub",
            NodeType::CodeGitlab => "GitLab",
            NodeType::CodeBitbucket => "Bitbucket",
            NodeType::BuildJenkins => "Jenkins",
            NodeType::BuildGithubActions => "GitHub Actions",
            NodeType::BuildMaven => "Maven",
            NodeType::TestJest => "Jest",
            NodeType::TestSelenium => "Selenium",
            NodeType::TestCypress => "Cypress",
            NodeType::TestSonarqube => "SonarQube",
            NodeType::ReleaseArgocd => "Argo CD",
            NodeType::ReleaseSpinnaker => "Spinnaker",
            NodeType::ReleaseTransportManagement => "Transport Management",
            NodeType::DeployKubernetes => "Kubernetes",
            NodeType::DeployDocker => "Docker",
            NodeType::DeployCloudFoundry => "Cloud Foundry",
            NodeType::DeploySapBtp => "SAP BTP",
            _ => return None,
        };
        Some(name)
    }

    /// Connector node for a registered tool, if the canvas has one.
    pub fn connector_for(tool: &str) -> Option<NodeType> {
        let tool = lookup_tool(tool)?;
        NodeType::ALL
            .into_iter()
            .find(|t| t.tool_name() == Some(tool.name))
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::UnknownNodeType(s.to_string()))
    }
}

impl TryFrom<String> for NodeType {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeType> for &'static str {
    fn from(value: NodeType) -> Self {
        value.as_str()
    }
}

/// Label for a raw node type id coming from outside the crate.
/// Undeclared ids render as [`UNKNOWN_LABEL`].
pub fn label_for(node_type: &str) -> &'static str {
    match node_type.parse::<NodeType>() {
        Ok(t) => t.label(),
        Err(_) => {
            log::debug!("no label for node type '{}'", node_type);
            UNKNOWN_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_node_type_has_a_label() {
        for t in NodeType::ALL {
            assert!(!t.label().is_empty(), "{t} has an empty label");
            assert_ne!(t.label(), UNKNOWN_LABEL, "{t} is unlabelled");
        }
    }

    #[test]
    fn wire_ids_are_unique_and_parse_back() {
        let ids: HashSet<&str> = NodeType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(ids.len(), NodeType::ALL.len());
        for t in NodeType::ALL {
            assert_eq!(t.as_str().parse::<NodeType>(), Ok(t));
        }
    }

    #[test]
    fn wire_ids_follow_family_prefixes() {
        for t in NodeType::ALL {
            let id = t.as_str();
            match t.family() {
                NodeFamily::Environment => assert!(id.starts_with("node_"), "{id}"),
                NodeFamily::Connector(c) => {
                    assert!(id.starts_with(&format!("{}_", c.as_str())), "{id}")
                }
                NodeFamily::Approval => assert!(id.starts_with("approval_"), "{id}"),
                NodeFamily::Annotation => assert!(id == "note" || id == "comment", "{id}"),
            }
        }
    }

    #[test]
    fn connectors_reference_registered_tools_of_their_category() {
        for t in NodeType::ALL {
            if let Some(category) = t.category() {
                let name = t.tool_name().expect("connector without tool");
                let tool = lookup_tool(name).expect("connector tool not registered");
                assert_eq!(tool.category, category, "{t}");
            } else {
                assert!(t.tool_name().is_none(), "{t}");
            }
        }
    }

    #[test]
    fn label_for_unknown_ids() {
        assert_eq!(label_for("code_github"), "GitHub");
        assert_eq!(label_for("approval_manual"), "Manual Approval");
        assert_eq!(label_for("code_svn"), UNKNOWN_LABEL);
        assert_eq!(label_for(""), UNKNOWN_LABEL);
        assert_eq!(label_for("Integration"), UNKNOWN_LABEL);
    }

    #[test]
    fn connector_for_tool() {
        assert_eq!(NodeType::connector_for("Jenkins"), Some(NodeType::BuildJenkins));
        // Registered, but no canvas connector yet.
        assert_eq!(NodeType::connector_for("Asana"), None);
        assert_eq!(NodeType::connector_for("Nope"), None);
    }

    #[test]
    fn serde_uses_wire_ids() {
        let json = serde_json::to_string(&NodeType::DeployKubernetes).unwrap();
        assert_eq!(json, "\"deploy_kubernetes\"");
        let back: NodeType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeType::DeployKubernetes);
        assert!(serde_json::from_str::<NodeType>("\"deploy_mars\"").is_err());
    }
}
