//! Pipeline header derivation.
//!
//! Both entry points are pure functions of their input.

use serde::{Deserialize, Serialize};

use super::deployment::DeploymentType;
use super::params::UrlPipelineParams;

pub const DEFAULT_PIPELINE_NAME: &str = "New Pipeline";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineState {
    pub pipeline_name: String,
    /// Carried as received; see [`PipelineState::deployment`].
    pub deployment_type: String,
    pub description: String,
}

impl PipelineState {
    /// The deployment type, if it is one of the declared literals.
    pub fn deployment(&self) -> Option<DeploymentType> {
        self.deployment_type.parse().ok()
    }
}

/// Already-resolved template metadata, e.g. loaded from a saved pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateData {
    pub name: String,
    #[serde(default)]
    pub enterprise: String,
    #[serde(default)]
    pub entity: String,
    pub deployment_type: String,
}

/// `"<enterprise> <entity> Pipeline"` when both parts are known.
fn enterprise_entity_name(enterprise: &str, entity: &str) -> Option<String> {
    if enterprise.is_empty() || entity.is_empty() {
        return None;
    }
    Some(format!("{} {} Pipeline", enterprise, entity))
}

/// Derive the header from URL parameters.
///
/// Name priority: explicit template name, then enterprise/entity, then
/// [`DEFAULT_PIPELINE_NAME`].
pub fn from_url_params(params: &UrlPipelineParams) -> PipelineState {
    let generated = enterprise_entity_name(&params.enterprise, &params.entity);

    let pipeline_name = if !params.template_name.is_empty() {
        params.template_name.clone()
    } else {
        generated
            .clone()
            .unwrap_or_else(|| DEFAULT_PIPELINE_NAME.to_string())
    };

    PipelineState {
        pipeline_name,
        deployment_type: params.deployment_type.clone(),
        description: generated.unwrap_or_default(),
    }
}

/// Derive the header from template data. The name is taken verbatim.
pub fn from_template_data(data: &TemplateData) -> PipelineState {
    PipelineState {
        pipeline_name: data.name.clone(),
        deployment_type: data.deployment_type.clone(),
        description: enterprise_entity_name(&data.enterprise, &data.entity).unwrap_or_default(),
    }
}
