use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for stencil operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Path could not be used as given.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Path escapes the project root.
    #[error("Path escapes the project root: {0}")]
    PathTraversal(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Directory traversal failed during template discovery.
    #[error("Failed to scan for templates: {0}")]
    Walk(#[from] walkdir::Error),

    /// Discovery found nothing to offer.
    #[error("No templates found under '{root}' (looked for {directory_name}/*.{extension})")]
    NoTemplates { root: String, directory_name: String, extension: String },

    /// Requested template label is not in the catalog.
    #[error("Template '{name}' not found. Available: {available}")]
    TemplateNotFound { name: String, available: String },

    /// A value was supplied for a key the template never declares.
    #[error("Template '{template}' has no placeholder '{key}'")]
    UnknownPlaceholder { template: String, key: String },

    /// A value was supplied for a system-filled placeholder.
    #[error("Placeholder '{0}' is filled automatically and cannot be edited")]
    ReadOnlyPlaceholder(String),

    /// Submission attempted without a class name.
    #[error("ClassName must not be empty")]
    MissingClassName,

    /// The destination file is already present; nothing was written.
    #[error("File already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// Workflow operation invoked from the wrong state.
    #[error("Cannot {operation} while {state}")]
    InvalidState { operation: &'static str, state: &'static str },

    /// Host environment could not be told about the new file.
    #[error("Failed to notify host about '{path}': {details}")]
    HostNotification { path: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
