//! Template flow rules (T001–T002).

use std::collections::HashSet;

use crate::error::PipelineError;
use crate::template::{Template, templates};

const MIN_STEPS: usize = 6;
const MAX_STEPS: usize = 8;

pub fn validate_templates() -> Vec<PipelineError> {
    let mut errors = Vec::new();
    for template in templates() {
        errors.extend(validate_template(template));
    }
    errors
}

pub fn validate_template(template: &Template) -> Vec<PipelineError> {
    let mut errors = Vec::new();

    t001_unique_step_ids(template, &mut errors);
    t002_step_count(template, &mut errors);

    errors
}

fn t001_unique_step_ids(template: &Template, errors: &mut Vec<PipelineError>) {
    let mut seen = HashSet::new();
    for step in template.steps {
        if !seen.insert(step.id) {
            errors.push(PipelineError::template(
                "T001",
                format!("Duplicate step id '{}'", step.id),
                Some(template.key.to_string()),
            ));
        }
    }
}

fn t002_step_count(template: &Template, errors: &mut Vec<PipelineError>) {
    let count = template.steps.len();
    if !(MIN_STEPS..=MAX_STEPS).contains(&count) {
        errors.push(PipelineError::template(
            "T002",
            format!(
                "Template must have between {} and {} steps, found {}",
                MIN_STEPS, MAX_STEPS, count
            ),
            Some(template.key.to_string()),
        ));
    }
}
