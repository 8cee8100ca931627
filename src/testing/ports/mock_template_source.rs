use crate::domain::{AppError, TemplateFile};
use crate::ports::TemplateSource;

/// `TemplateSource` serving a fixed list of documents.
#[derive(Clone, Debug, Default)]
pub struct MockTemplateSource {
    templates: Vec<TemplateFile>,
}

impl MockTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, path: &str, content: &str) -> Self {
        self.templates.push(TemplateFile::new(path, content));
        self
    }
}

impl TemplateSource for MockTemplateSource {
    fn discover(&self) -> Result<Vec<TemplateFile>, AppError> {
        Ok(self.templates.clone())
    }
}
