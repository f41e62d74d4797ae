//! Tool registry rules (R001–R003).

use std::collections::HashSet;

use crate::error::PipelineError;
use crate::registry::category::CATEGORY_ORDER;
use crate::registry::tools::{CATEGORY_TOOLS, lookup_tool};

pub fn validate_registry() -> Vec<PipelineError> {
    let mut errors = Vec::new();

    r001_r002_category_tools_registered(&mut errors);
    r003_category_order_is_permutation(&mut errors);

    errors
}

fn r001_r002_category_tools_registered(errors: &mut Vec<PipelineError>) {
    for (category, names) in CATEGORY_TOOLS {
        for name in *names {
            match lookup_tool(name) {
                None => errors.push(PipelineError::registry(
                    "R001",
                    format!("Category '{}' lists unregistered tool '{}'", category, name),
                    Some(name.to_string()),
                )),
                Some(tool) if tool.category != *category => errors.push(PipelineError::registry(
                    "R002",
                    format!(
                        "Tool '{}' is registered under '{}' but listed under '{}'",
                        name, tool.category, category
                    ),
                    Some(name.to_string()),
                )),
                Some(_) => {}
            }
        }
    }
}

fn r003_category_order_is_permutation(errors: &mut Vec<PipelineError>) {
    let mut seen = HashSet::new();
    for category in CATEGORY_ORDER {
        if !seen.insert(category) {
            errors.push(PipelineError::registry(
                "R003",
                format!("Category '{}' appears more than once in the display order", category),
                None,
            ));
        }
    }
    for (category, _) in CATEGORY_TOOLS {
        if !seen.contains(category) {
            errors.push(PipelineError::registry(
                "R003",
                format!("Category '{}' is missing from the display order", category),
                None,
            ));
        }
    }
}
