use crate::domain::{AppError, TemplateFile};

/// Port for discovering template documents.
pub trait TemplateSource {
    /// Enumerate every template file, in a stable discovery order.
    fn discover(&self) -> Result<Vec<TemplateFile>, AppError>;
}
