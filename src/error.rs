//! Error types shared across the crate.
//!
//! Lookups never fail: they fall back to a sentinel value. The types here are
//! only produced when a string from outside the crate is parsed into one of
//! the closed vocabularies, or when a static table is checked for consistency.

use serde::Serialize;
use thiserror::Error;

/// Rejection of an external string that does not name a declared value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown node type '{0}'")]
    UnknownNodeType(String),

    #[error("Unknown step kind '{0}'")]
    UnknownStepKind(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid deployment type '{0}' (expected 'Integration' or 'Extension')")]
    InvalidDeploymentType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Phase {
    Config,
    Params,
    Registry,
    Template,
    Canvas,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Config => write!(f, "Config"),
            Phase::Params => write!(f, "Params"),
            Phase::Registry => write!(f, "Registry"),
            Phase::Template => write!(f, "Template"),
            Phase::Canvas => write!(f, "Canvas"),
        }
    }
}

/// A coded diagnostic, e.g. `[Template:T001] Duplicate step id 'build' (at 'fiori-app')`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    /// Template key, tool name or node id the diagnostic points at.
    pub subject: Option<String>,
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.subject {
            Some(subject) => write!(
                f,
                "[{}:{}] {} (at '{}')",
                self.phase, self.code, self.message, subject
            ),
            None => write!(f, "[{}:{}] {}", self.phase, self.code, self.message),
        }
    }
}

impl std::error::Error for PipelineError {}

impl PipelineError {
    pub fn config(code: &str, message: impl Into<String>) -> Self {
        PipelineError {
            code: code.into(),
            phase: Phase::Config,
            message: message.into(),
            subject: None,
        }
    }

    pub fn params(code: &str, message: impl Into<String>) -> Self {
        PipelineError {
            code: code.into(),
            phase: Phase::Params,
            message: message.into(),
            subject: None,
        }
    }

    pub fn registry(code: &str, message: impl Into<String>, subject: Option<String>) -> Self {
        PipelineError {
            code: code.into(),
            phase: Phase::Registry,
            message: message.into(),
            subject,
        }
    }

    pub fn template(code: &str, message: impl Into<String>, subject: Option<String>) -> Self {
        PipelineError {
            code: code.into(),
            phase: Phase::Template,
            message: message.into(),
            subject,
        }
    }

    pub fn canvas(code: &str, message: impl Into<String>, subject: Option<String>) -> Self {
        PipelineError {
            code: code.into(),
            phase: Phase::Canvas,
            message: message.into(),
            subject,
        }
    }
}
