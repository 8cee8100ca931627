use std::collections::BTreeMap;
use std::path::PathBuf;

use super::placeholders::Placeholders;

/// Output file extension directive.
pub const EXTENSION: &str = "EXTENSION";
/// Menu label directive.
pub const MENUNAME: &str = "MENUNAME";
/// Display ordering directive; higher sorts first.
pub const PRIORITY: &str = "PRIORITY";

/// Parsed representation of one template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Label shown in the template menu.
    pub menu_label: String,
    /// Author-declared `&&KEY=VALUE&&` pairs, keys upper-cased.
    pub directives: BTreeMap<String, String>,
    /// `##KEY##` markers found in the body, with their stored values.
    pub placeholders: Placeholders,
    /// Template text with directive lines removed.
    pub body: String,
    pub priority: i32,
    /// File the template was read from.
    pub source: PathBuf,
}

impl TemplateDescriptor {
    /// Output extension as declared (or defaulted) by the template.
    pub fn extension(&self) -> &str {
        self.directives.get(EXTENSION).map(String::as_str).unwrap_or_default()
    }

    pub fn directive(&self, key: &str) -> Option<&str> {
        self.directives.get(&key.to_uppercase()).map(String::as_str)
    }

    /// Placeholder keys shown in the input form.
    pub fn editable_keys(&self) -> Vec<&str> {
        self.placeholders.editable_keys().collect()
    }
}
