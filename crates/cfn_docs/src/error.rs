//! Error types for documentation rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for documentation operations.
pub type DocsResult<T> = Result<T, DocsError>;

/// Errors that can occur while rendering documentation.
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Base template not found: {0}")]
    BaseTemplateNotFound(PathBuf),

    #[error("Malformed base template {path}: {message}")]
    MalformedBaseTemplate { path: PathBuf, message: String },

    #[error("Malformed template {section}: {message}")]
    MalformedTemplate { section: String, message: String },

    #[error("Template rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DocsError {
    pub(crate) fn malformed(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            section: section.into(),
            message: message.into(),
        }
    }

    /// Whether this error comes from the input template rather than the base template.
    pub fn is_template_error(&self) -> bool {
        matches!(self, Self::MalformedTemplate { .. })
    }
}
