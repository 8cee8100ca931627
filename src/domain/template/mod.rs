//! Template file model: parsing, cataloguing and rendering.

pub mod catalog;
pub mod descriptor;
pub mod parser;
pub mod placeholders;
pub mod render;

use std::path::PathBuf;

pub use catalog::TemplateCatalog;
pub use descriptor::{EXTENSION, MENUNAME, PRIORITY, TemplateDescriptor};
pub use parser::{TemplateParser, strip_directives};
pub use placeholders::{CLASS_NAME, Placeholders, YEAR};
pub use render::{RenderedFile, derive_class_name, render};

/// Raw template document as read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: PathBuf,
    pub content: String,
}

impl TemplateFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}
