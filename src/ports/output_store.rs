use std::path::Path;

use crate::domain::AppError;

/// Port for writing generated files.
pub trait OutputStore {
    /// Write `content` to `path` only if nothing exists there yet.
    ///
    /// Fails with [`AppError::DestinationExists`] without touching the existing file.
    fn create_new(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
