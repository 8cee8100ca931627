use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the environment hosting the workflow (editor, terminal).
pub trait HostEnvironment {
    /// Directory new files land in unless the user picks another.
    fn resolve_default_directory(&self) -> PathBuf;

    /// Tell the host a file was created so it can refresh and open it.
    fn notify_file_created(&self, path: &Path) -> Result<(), AppError>;
}
