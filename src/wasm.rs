//! WASM entry points for the dashboard.

use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::canvas::{CanvasSession, Position};
use crate::config::CanvasConfig;
use crate::error::PipelineError;
use crate::registry::{self, CATEGORY_ORDER, Category, NodeType};
use crate::state;
use crate::template;
use crate::validate;

/// Canvas editing session owned by the page. Node ids are sequenced per
/// session.
#[wasm_bindgen]
pub struct EditorSession {
    inner: CanvasSession,
}

#[wasm_bindgen]
impl EditorSession {
    /// Create a session from an optional JSON `CanvasConfig`.
    /// Throws a list of errors if the config is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<EditorSession, JsValue> {
        let config = match config_json.as_deref() {
            None | Some("") => CanvasConfig::default(),
            Some(json) => {
                CanvasConfig::from_json(json).map_err(|e| to_js(&[ErrorDto::from(e)]))?
            }
        };
        Ok(EditorSession {
            inner: CanvasSession::new(config),
        })
    }

    /// Resolve the editor's query string into the initial pipeline.
    pub fn resolve(&mut self, query: &str) -> JsValue {
        to_js(&self.inner.resolve(query))
    }

    pub fn next_node_id(&mut self) -> String {
        self.inner.next_node_id()
    }

    /// Create a node for a palette drop. Returns `null` for undeclared node types.
    pub fn add_node(&mut self, node_type: &str, x: f64, y: f64) -> JsValue {
        match node_type.parse::<NodeType>() {
            Ok(t) => to_js(&self.inner.add_node(t, Position { x, y })),
            Err(e) => {
                log::warn!("{}", e);
                JsValue::NULL
            }
        }
    }

    pub fn reset_ids(&mut self) {
        self.inner.ids().reset();
    }
}

/// Parse a query string into URL pipeline params.
#[wasm_bindgen]
pub fn parse_pipeline_params(query: &str) -> JsValue {
    to_js(&state::params::parse(query))
}

/// Encode a params JSON object into a canonical query string.
/// Missing fields take their defaults; malformed JSON throws a list of errors.
#[wasm_bindgen]
pub fn encode_pipeline_params(params_json: &str) -> Result<String, JsValue> {
    state::params::encode_json(params_json).map_err(|e| to_js(&[ErrorDto::from(e)]))
}

#[wasm_bindgen]
pub fn node_label(node_type: &str) -> String {
    registry::label_for(node_type).to_string()
}

#[wasm_bindgen]
pub fn is_valid_deployment_type(value: &str) -> bool {
    state::is_valid_deployment_type(value)
}

#[wasm_bindgen]
pub fn pipeline_storage_key(key: &str) -> String {
    state::storage_key(key)
}

/// Ordered steps of a template, `[]` for unknown keys.
#[wasm_bindgen]
pub fn template_flow(key: &str) -> JsValue {
    to_js(template::flow_for(key))
}

/// Tool palette: categories in display order with their tools.
#[wasm_bindgen]
pub fn tool_registry() -> JsValue {
    let palette: Vec<CategoryDto> = CATEGORY_ORDER
        .iter()
        .map(|&category| CategoryDto {
            category,
            label: category.label(),
            color: category.color(),
            tools: registry::tools_for_category(category)
                .iter()
                .filter_map(|name| registry::lookup_tool(name))
                .collect(),
        })
        .collect();
    to_js(&palette)
}

/// Flatten a `{ category: [tool, ...] }` JSON selection into enabled tool names.
#[wasm_bindgen]
pub fn enabled_tools(selection_json: &str) -> JsValue {
    let selection = serde_json::from_str::<HashMap<Category, Vec<String>>>(selection_json)
        .unwrap_or_else(|e| {
            log::warn!("invalid tool selection JSON: {}", e);
            HashMap::new()
        });
    let enabled: Vec<String> = registry::enabled_tools(&selection).into_iter().collect();
    to_js(&enabled)
}

/// Run the catalog consistency rules. Returns a JSON array of errors.
#[wasm_bindgen]
pub fn validate_catalog() -> JsValue {
    let errors: Vec<ErrorDto> = validate::validate_catalog()
        .into_iter()
        .map(ErrorDto::from)
        .collect();
    to_js(&errors)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    subject: Option<String>,
}

impl From<PipelineError> for ErrorDto {
    fn from(e: PipelineError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            subject: e.subject,
        }
    }
}

#[derive(serde::Serialize)]
struct CategoryDto {
    category: Category,
    label: &'static str,
    color: &'static str,
    tools: Vec<&'static registry::Tool>,
}
