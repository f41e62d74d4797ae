//! Query-string codec for deep links into the canvas editor.
//!
//! Keys are emitted in a fixed order: `mode`, `templateId`, `name`,
//! `enterprise`, `entity`, `deploymentType`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::deployment::DEFAULT_DEPLOYMENT_TYPE;
use crate::error::PipelineError;
use crate::template::{self, Template};

pub const EDIT_MODE: &str = "edit";

const KEY_MODE: &str = "mode";
const KEY_TEMPLATE_ID: &str = "templateId";
const KEY_NAME: &str = "name";
const KEY_ENTERPRISE: &str = "enterprise";
const KEY_ENTITY: &str = "entity";
const KEY_DEPLOYMENT_TYPE: &str = "deploymentType";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlPipelineParams {
    pub mode: String,
    /// Template catalog key; empty when the pipeline is not template based.
    pub template_id: String,
    /// Carried under the `name` query key.
    pub template_name: String,
    pub enterprise: String,
    pub entity: String,
    pub deployment_type: String,
}

impl Default for UrlPipelineParams {
    fn default() -> Self {
        UrlPipelineParams {
            mode: EDIT_MODE.to_string(),
            template_id: String::new(),
            template_name: String::new(),
            enterprise: String::new(),
            entity: String::new(),
            deployment_type: DEFAULT_DEPLOYMENT_TYPE.to_string(),
        }
    }
}

impl UrlPipelineParams {
    /// Parameters that open `template` in the editor.
    pub fn for_template(template: &Template, enterprise: &str, entity: &str) -> Self {
        UrlPipelineParams {
            mode: EDIT_MODE.to_string(),
            template_id: template.key.to_string(),
            template_name: template.name.to_string(),
            enterprise: enterprise.to_string(),
            entity: entity.to_string(),
            deployment_type: template.deployment_type.to_string(),
        }
    }
}

/// Parse a query string (with or without the leading `?`).
///
/// The first occurrence of a key wins. Missing or empty `mode` and
/// `deploymentType` take their defaults; every other missing field is empty.
/// Values that fail to percent-decode are treated as missing.
pub fn parse(query: &str) -> UrlPipelineParams {
    from_values(decode_values(query), DEFAULT_DEPLOYMENT_TYPE.as_str())
}

/// Like [`parse`], but a missing `deploymentType` takes the deployment type
/// of the catalog template named by `templateId`, when there is one.
pub fn parse_for_template(query: &str) -> UrlPipelineParams {
    let values = decode_values(query);
    let fallback = values
        .get(KEY_TEMPLATE_ID)
        .and_then(|key| template::template(key))
        .map(|t| t.deployment_type)
        .unwrap_or(DEFAULT_DEPLOYMENT_TYPE);
    from_values(values, fallback.as_str())
}

/// Encode params in canonical key order. Every key is always present.
pub fn encode(params: &UrlPipelineParams) -> String {
    [
        (KEY_MODE, params.mode.as_str()),
        (KEY_TEMPLATE_ID, params.template_id.as_str()),
        (KEY_NAME, params.template_name.as_str()),
        (KEY_ENTERPRISE, params.enterprise.as_str()),
        (KEY_ENTITY, params.entity.as_str()),
        (KEY_DEPLOYMENT_TYPE, params.deployment_type.as_str()),
    ]
    .into_iter()
    .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
    .collect::<Vec<_>>()
    .join("&")
}

/// Encode a params JSON object. Missing fields take their defaults.
pub fn encode_json(json: &str) -> Result<String, PipelineError> {
    let params = serde_json::from_str::<UrlPipelineParams>(json).map_err(|e| {
        PipelineError::params("U001", format!("Failed to parse pipeline params JSON: {}", e))
    })?;
    Ok(encode(&params))
}

fn decode_values(query: &str) -> HashMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut values: HashMap<String, String> = HashMap::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let Some(key) = decode_component(raw_key) else {
            log::warn!("skipping query key that is not valid UTF-8: '{}'", raw_key);
            continue;
        };
        let Some(value) = decode_component(raw_value) else {
            log::warn!("ignoring undecodable value for query key '{}'", key);
            continue;
        };
        values.entry(key).or_insert(value);
    }

    values
}

fn from_values(mut values: HashMap<String, String>, deployment_type: &str) -> UrlPipelineParams {
    UrlPipelineParams {
        mode: take_or(&mut values, KEY_MODE, EDIT_MODE),
        template_id: take_or(&mut values, KEY_TEMPLATE_ID, ""),
        template_name: take_or(&mut values, KEY_NAME, ""),
        enterprise: take_or(&mut values, KEY_ENTERPRISE, ""),
        entity: take_or(&mut values, KEY_ENTITY, ""),
        deployment_type: take_or(&mut values, KEY_DEPLOYMENT_TYPE, deployment_type),
    }
}

fn decode_component(raw: &str) -> Option<String> {
    // Form encoding: '+' stands for a space.
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}

fn take_or(values: &mut HashMap<String, String>, key: &str, default: &str) -> String {
    match values.remove(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_uses_defaults() {
        let params = parse("");
        assert_eq!(params, UrlPipelineParams::default());
        assert_eq!(params.mode, "edit");
        assert_eq!(params.deployment_type, "Integration");
    }

    #[test]
    fn empty_mode_takes_default() {
        let params = parse("?mode=&deploymentType=");
        assert_eq!(params.mode, EDIT_MODE);
        assert_eq!(params.deployment_type, "Integration");
    }

    #[test]
    fn first_occurrence_wins() {
        let params = parse("entity=Billing&entity=Payroll");
        assert_eq!(params.entity, "Billing");
    }

    #[test]
    fn plus_and_percent_decode() {
        let params = parse("name=Nightly+Release&enterprise=Acme%20Corp");
        assert_eq!(params.template_name, "Nightly Release");
        assert_eq!(params.enterprise, "Acme Corp");
    }

    #[test]
    fn undecodable_value_is_missing() {
        let params = parse("enterprise=%FF%FE&entity=Billing");
        assert_eq!(params.enterprise, "");
        assert_eq!(params.entity, "Billing");
    }

    #[test]
    fn unknown_keys_and_bare_keys_are_ignored() {
        let params = parse("debug&foo=bar&entity=Billing");
        assert_eq!(params.entity, "Billing");
        assert_eq!(params.mode, EDIT_MODE);
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let params = UrlPipelineParams {
            template_name: "A&B=C+D".into(),
            ..UrlPipelineParams::default()
        };
        let query = encode(&params);
        assert_eq!(
            query,
            "mode=edit&templateId=&name=A%26B%3DC%2BD&enterprise=&entity=&deploymentType=Integration"
        );
        assert_eq!(parse(&query), params);
    }

    #[test]
    fn template_supplies_missing_deployment_type() {
        let params = parse_for_template("templateId=fiori-app");
        assert_eq!(params.deployment_type, "Extension");

        let params = parse_for_template("templateId=fiori-app&deploymentType=Integration");
        assert_eq!(params.deployment_type, "Integration");

        let params = parse_for_template("templateId=fiori-app&deploymentType=");
        assert_eq!(params.deployment_type, "Extension");

        let params = parse_for_template("templateId=deleted");
        assert_eq!(params.deployment_type, "Integration");
    }

    #[test]
    fn encode_json_reports_invalid_input() {
        let err = encode_json("{ not json").unwrap_err();
        assert_eq!(err.code, "U001");

        let query = encode_json(r#"{ "templateId": "abap-cloud" }"#).unwrap();
        assert_eq!(
            query,
            "mode=edit&templateId=abap-cloud&name=&enterprise=&entity=&deploymentType=Integration"
        );
    }
}
