//! Canvas entry point.
//!
//! Turns the editor's query string into the initial pipeline handed to the
//! canvas renderer: parse params → derive the header → expand the template
//! flow through the step mapper → assign node ids → chain and lay out the
//! nodes left to right.

pub mod graph;
pub mod ids;

pub use graph::PipelineGraph;
pub use ids::NodeIdGenerator;

use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::registry::NodeType;
use crate::state::{self, PipelineState, TemplateData, UrlPipelineParams};
use crate::template::{self, StepDescriptor};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasNode {
    pub id: String,
    /// Template step this node was generated from.
    pub step_id: Option<String>,
    pub node_type: NodeType,
    pub label: String,
    pub type_label: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl CanvasEdge {
    pub fn between(source: &str, target: &str) -> Self {
        CanvasEdge {
            id: format!("e-{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// Everything the canvas renderer needs to open the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPipeline {
    pub params: UrlPipelineParams,
    pub state: PipelineState,
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
}

/// One editing session: its layout settings and its node id sequence.
#[derive(Debug, Clone, Default)]
pub struct CanvasSession {
    config: CanvasConfig,
    ids: NodeIdGenerator,
}

impl CanvasSession {
    pub fn new(config: CanvasConfig) -> Self {
        let ids = NodeIdGenerator::with_prefix(config.id_prefix.clone());
        CanvasSession { config, ids }
    }

    pub fn ids(&mut self) -> &mut NodeIdGenerator {
        &mut self.ids
    }

    pub fn next_node_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Resolve a query string into the initial pipeline. A template opened
    /// without an explicit `deploymentType` keeps its own deployment type.
    pub fn resolve(&mut self, query: &str) -> ResolvedPipeline {
        let params = state::params::parse_for_template(query);
        self.resolve_params(params)
    }

    pub fn resolve_params(&mut self, params: UrlPipelineParams) -> ResolvedPipeline {
        let template = if params.template_id.is_empty() {
            None
        } else {
            let found = template::template(&params.template_id);
            if found.is_none() {
                log::warn!("unknown template '{}', opening an empty pipeline", params.template_id);
            }
            found
        };

        let state = match template {
            Some(t) if params.template_name.is_empty() => {
                state::from_template_data(&TemplateData {
                    name: t.name.to_string(),
                    enterprise: params.enterprise.clone(),
                    entity: params.entity.clone(),
                    deployment_type: params.deployment_type.clone(),
                })
            }
            _ => state::from_url_params(&params),
        };

        if state.deployment().is_none() {
            log::warn!(
                "deployment type '{}' is not one of the declared types",
                state.deployment_type
            );
        }

        let steps = template.map(|t| t.steps).unwrap_or(&[]);
        let mut nodes = expand_flow(steps, &mut self.ids);
        let edges = chain_edges(&nodes);
        layout(&mut nodes, &edges, &self.config);

        log::debug!(
            "resolved pipeline '{}' with {} nodes ({} ids issued)",
            state.pipeline_name,
            nodes.len(),
            self.ids.issued()
        );

        ResolvedPipeline {
            params,
            state,
            nodes,
            edges,
        }
    }

    /// A new node dropped onto the canvas by the user.
    pub fn add_node(&mut self, node_type: NodeType, position: Position) -> CanvasNode {
        CanvasNode {
            id: self.ids.next_id(),
            step_id: None,
            node_type,
            label: node_type.label().to_string(),
            type_label: node_type.label().to_string(),
            position,
        }
    }
}

/// Map template steps to nodes, one node per step, in order.
pub fn expand_flow(steps: &[StepDescriptor], ids: &mut NodeIdGenerator) -> Vec<CanvasNode> {
    steps
        .iter()
        .map(|step| {
            let node_type = template::node_type_for(step.kind);
            CanvasNode {
                id: ids.next_id(),
                step_id: Some(step.id.to_string()),
                node_type,
                label: step.title.to_string(),
                type_label: node_type.label().to_string(),
                position: Position::default(),
            }
        })
        .collect()
}

/// Connect consecutive nodes.
pub fn chain_edges(nodes: &[CanvasNode]) -> Vec<CanvasEdge> {
    nodes
        .windows(2)
        .map(|pair| CanvasEdge::between(&pair[0].id, &pair[1].id))
        .collect()
}

/// Place nodes left to right in topological order. Falls back to list
/// order when the graph cannot be sorted.
pub fn layout(nodes: &mut [CanvasNode], edges: &[CanvasEdge], config: &CanvasConfig) {
    let order = match PipelineGraph::build(nodes, edges) {
        Ok(graph) => graph.topo_order().map_err(|e| vec![e]),
        Err(errors) => Err(errors),
    };

    let order: Vec<String> = match order {
        Ok(order) => order,
        Err(errors) => {
            for e in &errors {
                log::warn!("layout falls back to list order: {}", e);
            }
            nodes.iter().map(|n| n.id.clone()).collect()
        }
    };

    for (column, id) in order.iter().enumerate() {
        if let Some(node) = nodes.iter_mut().find(|n| &n.id == id) {
            node.position = Position {
                x: config.origin_x + column as f64 * config.node_spacing,
                y: config.origin_y,
            };
        }
    }
}
