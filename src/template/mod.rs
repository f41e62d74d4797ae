//! Predefined pipeline templates and the mapping from abstract steps to
//! canvas node types.

pub mod catalog;
pub mod mapper;

pub use catalog::{StepDescriptor, Template, flow_for, template, template_keys, templates};
pub use mapper::{StepKind, node_type_for, node_type_for_str};
