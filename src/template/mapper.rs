//! Step-to-node mapping.
//!
//! Every step kind has one default connector or gate. Template steps are
//! typed as [`StepKind`], so the mapping is total; raw kinds from outside the
//! crate go through [`node_type_for_str`], which rejects unknown kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::registry::NodeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Source,
    Build,
    Test,
    Deploy,
    Approval,
}

impl StepKind {
    pub const ALL: [StepKind; 5] = [
        StepKind::Source,
        StepKind::Build,
        StepKind::Test,
        StepKind::Deploy,
        StepKind::Approval,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Source => "source",
            StepKind::Build => "build",
            StepKind::Test => "test",
            StepKind::Deploy => "deploy",
            StepKind::Approval => "approval",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseError::UnknownStepKind(s.to_string()))
    }
}

/// Default node type for a step kind.
pub fn node_type_for(kind: StepKind) -> NodeType {
    match kind {
        StepKind::Source => NodeType::CodeGithub,
        StepKind::Build => NodeType::BuildJenkins,
        StepKind::Test => NodeType::TestJest,
        StepKind::Deploy => NodeType::DeployKubernetes,
        StepKind::Approval => NodeType::ApprovalManual,
    }
}

/// Map a raw step kind string. Unknown kinds are an error rather than a
/// placeholder node type.
pub fn node_type_for_str(kind: &str) -> Result<NodeType, ParseError> {
    let kind = kind.parse::<StepKind>()?;
    Ok(node_type_for(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table() {
        assert_eq!(node_type_for(StepKind::Source).as_str(), "code_github");
        assert_eq!(node_type_for(StepKind::Build).as_str(), "build_jenkins");
        assert_eq!(node_type_for(StepKind::Test).as_str(), "test_jest");
        assert_eq!(node_type_for(StepKind::Deploy).as_str(), "deploy_kubernetes");
        assert_eq!(node_type_for(StepKind::Approval).as_str(), "approval_manual");
    }

    #[test]
    fn mapping_is_idempotent() {
        for kind in StepKind::ALL {
            assert_eq!(node_type_for(kind), node_type_for(kind));
        }
    }

    #[test]
    fn raw_kinds() {
        assert_eq!(node_type_for_str("deploy"), Ok(NodeType::DeployKubernetes));
        assert_eq!(
            node_type_for_str("lint"),
            Err(ParseError::UnknownStepKind("lint".into()))
        );
        assert!(node_type_for_str("Build").is_err());
    }
}
