//! petgraph-based directed graph over generated canvas nodes.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use super::{CanvasEdge, CanvasNode};
use crate::error::PipelineError;

pub struct PipelineGraph {
    pub graph: DiGraph<String, String>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl PipelineGraph {
    pub fn build(nodes: &[CanvasNode], edges: &[CanvasEdge]) -> Result<Self, Vec<PipelineError>> {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut errors = Vec::new();

        for node in nodes {
            if node_indices.contains_key(&node.id) {
                errors.push(PipelineError::canvas(
                    "K001",
                    format!("Duplicate node id '{}'", node.id),
                    Some(node.id.clone()),
                ));
                continue;
            }
            let idx = graph.add_node(node.id.clone());
            node_indices.insert(node.id.clone(), idx);
        }

        for edge in edges {
            match (node_indices.get(&edge.source), node_indices.get(&edge.target)) {
                (Some(&s), Some(&t)) => {
                    graph.add_edge(s, t, edge.id.clone());
                }
                (None, _) => {
                    errors.push(PipelineError::canvas(
                        "K002",
                        format!(
                            "Edge '{}' references unknown source node '{}'",
                            edge.id, edge.source
                        ),
                        Some(edge.id.clone()),
                    ));
                }
                (_, None) => {
                    errors.push(PipelineError::canvas(
                        "K002",
                        format!(
                            "Edge '{}' references unknown target node '{}'",
                            edge.id, edge.target
                        ),
                        Some(edge.id.clone()),
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(PipelineGraph { graph, node_indices })
    }

    /// Node ids in topological order.
    pub fn topo_order(&self) -> Result<Vec<String>, PipelineError> {
        match toposort(&self.graph, None) {
            Ok(indices) => Ok(indices
                .into_iter()
                .map(|idx| self.graph[idx].clone())
                .collect()),
            Err(cycle) => {
                let id = self.graph[cycle.node_id()].clone();
                Err(PipelineError::canvas(
                    "K003",
                    format!("Cycle detected at node '{}'", id),
                    Some(id),
                ))
            }
        }
    }
}
