//! Per-session pipeline state: deployment types, URL parameters and the
//! derived pipeline header shown in the canvas editor.

pub mod deployment;
pub mod params;
pub mod pipeline_state;

pub use deployment::{DEFAULT_DEPLOYMENT_TYPE, DeploymentType, is_valid_deployment_type};
pub use params::{EDIT_MODE, UrlPipelineParams};
pub use pipeline_state::{
    DEFAULT_PIPELINE_NAME, PipelineState, TemplateData, from_template_data, from_url_params,
};

const STORAGE_KEY_PREFIX: &str = "pipeline_";

/// Key under which the dashboard persists a pipeline configuration.
pub fn storage_key(key: &str) -> String {
    format!("{STORAGE_KEY_PREFIX}{key}")
}
