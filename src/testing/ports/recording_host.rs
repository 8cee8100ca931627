use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::HostEnvironment;

/// Host double recording every created-file notification.
#[derive(Debug)]
pub struct RecordingHost {
    default_directory: PathBuf,
    pub notified: RefCell<Vec<PathBuf>>,
    pub should_fail: RefCell<bool>,
}

#[allow(dead_code)]
impl RecordingHost {
    pub fn new(default_directory: impl Into<PathBuf>) -> Self {
        Self {
            default_directory: default_directory.into(),
            notified: RefCell::new(Vec::new()),
            should_fail: RefCell::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.borrow_mut() = fail;
    }

    pub fn notified_paths(&self) -> Vec<PathBuf> {
        self.notified.borrow().clone()
    }
}

impl HostEnvironment for RecordingHost {
    fn resolve_default_directory(&self) -> PathBuf {
        self.default_directory.clone()
    }

    fn notify_file_created(&self, path: &Path) -> Result<(), AppError> {
        self.notified.borrow_mut().push(path.to_path_buf());
        if *self.should_fail.borrow() {
            return Err(AppError::HostNotification {
                path: path.display().to_string(),
                details: "mock host failure".to_string(),
            });
        }
        Ok(())
    }
}
