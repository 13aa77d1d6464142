//! Stylesheet errors.

use std::path::PathBuf;

/// Error returned when loading or resolving a stylesheet fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StylesheetError {
    /// The document is not valid YAML, or not shaped like a stylesheet.
    #[error("failed to parse stylesheet: {message}")]
    Parse { message: String },

    /// A style declares a key that names no attribute.
    #[error("style '{style}' has unknown attribute '{attribute}'")]
    UnknownAttribute { style: String, attribute: String },

    /// An attribute value could not be converted to its payload type.
    #[error("style '{style}' has invalid value for '{attribute}': {message}")]
    InvalidValue {
        style: String,
        attribute: String,
        message: String,
    },

    /// A style extends a style that doesn't exist.
    #[error("style '{from}' extends non-existent style '{to}'")]
    UnresolvedBase { from: String, to: String },

    /// A cycle was detected while resolving `extends`.
    #[error("cycle detected in style inheritance: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// The requested style is not defined.
    #[error("style not found: '{name}'")]
    NotFound { name: String },

    /// Failed to read a stylesheet file from disk.
    #[error("failed to read stylesheet '{}': {message}", .path.display())]
    Read { path: PathBuf, message: String },
}
