use std::path::Path;

use crate::domain::AppError;
use crate::ports::OutputStore;

use super::TestFiles;

/// In-memory `OutputStore` with the same refusal semantics as the filesystem.
#[derive(Clone, Debug, Default)]
pub struct MockOutputStore {
    pub files: TestFiles,
}

impl MockOutputStore {
    pub fn new(files: TestFiles) -> Self {
        Self { files }
    }
}

impl OutputStore for MockOutputStore {
    fn create_new(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut files = self.files.files.lock().unwrap();
        if files.contains_key(path) {
            return Err(AppError::DestinationExists(path.to_path_buf()));
        }
        files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
