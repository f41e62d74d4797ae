//! Deployment types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentType {
    Integration,
    Extension,
}

pub const DEFAULT_DEPLOYMENT_TYPE: DeploymentType = DeploymentType::Integration;

impl DeploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentType::Integration => "Integration",
            DeploymentType::Extension => "Extension",
        }
    }
}

impl std::fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentType {
    type Err = ParseError;

    /// Exact, case-sensitive match. No trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Integration" => Ok(DeploymentType::Integration),
            "Extension" => Ok(DeploymentType::Extension),
            other => Err(ParseError::InvalidDeploymentType(other.to_string())),
        }
    }
}

/// Guard for deployment types received from URLs or saved settings.
pub fn is_valid_deployment_type(value: &str) -> bool {
    value.parse::<DeploymentType>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator() {
        assert!(is_valid_deployment_type("Integration"));
        assert!(is_valid_deployment_type("Extension"));
        assert!(!is_valid_deployment_type(""));
        assert!(!is_valid_deployment_type("integration"));
        assert!(!is_valid_deployment_type(" Extension"));
        assert!(!is_valid_deployment_type("Extension "));
    }

    #[test]
    fn serializes_as_literal() {
        assert_eq!(
            serde_json::to_string(&DeploymentType::Extension).unwrap(),
            "\"Extension\""
        );
    }
}
