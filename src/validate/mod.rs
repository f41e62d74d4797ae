//! Consistency checks over the static catalogs.
//!
//! The tables are hand-maintained; these rules catch drift between them.

pub mod registry_rules;
pub mod template_rules;

use crate::error::PipelineError;

/// Run every catalog rule. Returns all errors found.
pub fn validate_catalog() -> Vec<PipelineError> {
    let mut errors = registry_rules::validate_registry();
    errors.extend(template_rules::validate_templates());
    errors
}
