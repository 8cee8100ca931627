use log::warn;

use super::descriptor::TemplateDescriptor;

/// Templates in menu order: descending priority, ties in discovery order.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    entries: Vec<TemplateDescriptor>,
}

impl TemplateCatalog {
    /// Build a catalog from descriptors in discovery order.
    ///
    /// Menu labels are unique; a later template reusing a label is dropped.
    pub fn new(descriptors: impl IntoIterator<Item = TemplateDescriptor>) -> Self {
        let mut entries: Vec<TemplateDescriptor> = Vec::new();
        for descriptor in descriptors {
            if let Some(existing) = entries.iter().find(|e| e.menu_label == descriptor.menu_label) {
                warn!(
                    "Skipping template {}: menu label '{}' already used by {}",
                    descriptor.source.display(),
                    descriptor.menu_label,
                    existing.source.display()
                );
                continue;
            }
            entries.push(descriptor);
        }

        entries.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { entries }
    }

    pub fn entries(&self) -> &[TemplateDescriptor] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&TemplateDescriptor> {
        self.entries.get(index)
    }

    /// Position of the template with `label`.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.menu_label == label)
    }

    pub fn find(&self, label: &str) -> Option<&TemplateDescriptor> {
        self.position(label).and_then(|index| self.get(index))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.menu_label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
