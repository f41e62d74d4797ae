//! Canvas configuration.
//!
//! Loaded from the dashboard's JSON settings; every field has a default so
//! partial documents are accepted.

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

pub const DEFAULT_ID_PREFIX: &str = "node-";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasConfig {
    /// Prefix of generated node ids, e.g. `node-1`.
    pub id_prefix: String,
    /// Position of the first generated node.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Horizontal distance between consecutive generated nodes.
    pub node_spacing: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            origin_x: 100.0,
            origin_y: 200.0,
            node_spacing: 250.0,
        }
    }
}

impl CanvasConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let config = serde_json::from_str::<CanvasConfig>(json).map_err(|e| {
            PipelineError::config("C001", format!("Failed to parse canvas config JSON: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), PipelineError> {
        if self.id_prefix.is_empty() {
            return Err(PipelineError::config("C002", "Node id prefix must not be empty"));
        }
        if !self.node_spacing.is_finite() || self.node_spacing <= 0.0 {
            return Err(PipelineError::config(
                "C003",
                format!("Node spacing must be a positive number, got {}", self.node_spacing),
            ));
        }
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(PipelineError::config("C003", "Canvas origin must be finite"));
        }
        Ok(())
    }
}
