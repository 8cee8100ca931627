//! Project configuration domain models.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration loaded from `stencil.toml` at the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Where and how templates are discovered.
    #[serde(default)]
    pub templates: TemplatesConfig,
    /// Defaults applied when composing the output file.
    #[serde(default)]
    pub output: OutputConfig,
    /// Host integration hooks.
    #[serde(default)]
    pub host: HostConfig,
}

impl ToolConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.templates.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Template discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Directory scanned recursively, relative to the project root.
    #[serde(default = "default_search_root")]
    pub search_root: String,
    /// Name of the directories that hold template files.
    #[serde(default = "default_directory_name")]
    pub directory_name: String,
    /// Template file extension, without the leading dot.
    #[serde(default = "default_template_extension")]
    pub extension: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            search_root: default_search_root(),
            directory_name: default_directory_name(),
            extension: default_template_extension(),
        }
    }
}

impl TemplatesConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_relative("templates.search_root", &self.search_root)?;
        if self.directory_name.trim().is_empty() {
            return Err(AppError::config_error("templates.directory_name must not be empty"));
        }
        if self.directory_name.contains('/') || self.directory_name.contains('\\') {
            return Err(AppError::config_error(
                "templates.directory_name must be a single directory name",
            ));
        }
        if self.extension.trim().is_empty() {
            return Err(AppError::config_error("templates.extension must not be empty"));
        }
        if self.extension.starts_with('.') {
            return Err(AppError::config_error(
                "templates.extension must not start with '.' (use \"fpst\", not \".fpst\")",
            ));
        }
        Ok(())
    }
}

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Extension used when a template declares no `EXTENSION` directive.
    #[serde(default = "default_source_extension")]
    pub default_extension: String,
    /// Output directory used when nothing is selected, relative to the project root.
    #[serde(default = "default_directory")]
    pub default_directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_extension: default_source_extension(),
            default_directory: default_directory(),
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_relative("output.default_directory", &self.default_directory)
    }
}

/// Host integration settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Command invoked with the path of each newly created file.
    #[serde(default)]
    pub open_command: Option<String>,
}

pub const DEFAULT_SOURCE_EXTENSION: &str = ".cs";

fn default_search_root() -> String {
    ".".to_string()
}

fn default_directory_name() -> String {
    "ScriptTemplates".to_string()
}

fn default_template_extension() -> String {
    "fpst".to_string()
}

fn default_source_extension() -> String {
    DEFAULT_SOURCE_EXTENSION.to_string()
}

fn default_directory() -> String {
    ".".to_string()
}

fn validate_relative(field: &str, value: &str) -> Result<(), AppError> {
    let path = Path::new(value);
    if path.is_absolute() {
        return Err(AppError::config_error(format!(
            "{field} must be relative to the project root: {value}"
        )));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(AppError::config_error(format!(
            "{field} must stay inside the project root: {value}"
        )));
    }
    Ok(())
}
