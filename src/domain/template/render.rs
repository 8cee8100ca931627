use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::descriptor::TemplateDescriptor;
use super::placeholders::CLASS_NAME;

/// Fully substituted template ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Output file stem.
    pub class_name: String,
    /// Lower-cased output extension, including its dot when the template has one.
    pub extension: String,
    pub content: String,
}

impl RenderedFile {
    pub fn file_name(&self) -> String {
        format!("{}{}", self.class_name, self.extension)
    }

    /// `dir/<ClassName><extension>`
    pub fn destination(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Substitute placeholder values into the template body.
///
/// `values` overrides the descriptor's stored placeholder values; keys not
/// registered on the descriptor are ignored.
pub fn render(descriptor: &TemplateDescriptor, values: &BTreeMap<String, String>) -> RenderedFile {
    let mut content = descriptor.body.clone();
    for (key, stored) in descriptor.placeholders.iter() {
        let value = values.get(key).map(String::as_str).unwrap_or(stored);
        content = content.replace(&format!("##{key}##"), value);
    }

    let raw_class_name = values
        .get(CLASS_NAME)
        .map(String::as_str)
        .or_else(|| descriptor.placeholders.get(CLASS_NAME))
        .unwrap_or_default();

    RenderedFile {
        class_name: derive_class_name(raw_class_name),
        extension: descriptor.extension().to_lowercase(),
        content,
    }
}

/// Strip any directory or extension a user typed into the class name.
pub fn derive_class_name(raw: &str) -> String {
    Path::new(raw)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
