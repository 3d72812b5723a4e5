//! Page rendering error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// An embedded template failed to parse or is not valid UTF-8
    #[error("Template error: {0}")]
    Template(String),

    /// A template failed while rendering
    #[error("Failed to render '{template}': {message}")]
    Render { template: String, message: String },
}
