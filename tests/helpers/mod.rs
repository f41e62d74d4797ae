use pipeline_core::canvas::{CanvasSession, ResolvedPipeline};
use pipeline_core::config::CanvasConfig;
use pipeline_core::state::UrlPipelineParams;

// =============================================================================
// Params builders
// =============================================================================

pub fn params(
    mode: &str,
    template_id: &str,
    template_name: &str,
    enterprise: &str,
    entity: &str,
    deployment_type: &str,
) -> UrlPipelineParams {
    UrlPipelineParams {
        mode: mode.into(),
        template_id: template_id.into(),
        template_name: template_name.into(),
        enterprise: enterprise.into(),
        entity: entity.into(),
        deployment_type: deployment_type.into(),
    }
}

/// Params with only enterprise, entity and template name set.
pub fn named(template_name: &str, enterprise: &str, entity: &str) -> UrlPipelineParams {
    UrlPipelineParams {
        template_name: template_name.into(),
        enterprise: enterprise.into(),
        entity: entity.into(),
        ..UrlPipelineParams::default()
    }
}

// =============================================================================
// Session helpers
// =============================================================================

pub fn session() -> CanvasSession {
    CanvasSession::new(CanvasConfig::default())
}

pub fn resolve(query: &str) -> ResolvedPipeline {
    session().resolve(query)
}

pub fn node_types(pipeline: &ResolvedPipeline) -> Vec<&'static str> {
    pipeline.nodes.iter().map(|n| n.node_type.as_str()).collect()
}

pub fn node_ids(pipeline: &ResolvedPipeline) -> Vec<&str> {
    pipeline.nodes.iter().map(|n| n.id.as_str()).collect()
}
