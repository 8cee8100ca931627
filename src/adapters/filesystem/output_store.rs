//! `OutputStore` implementation for `FilesystemStore`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::warn;

use crate::domain::AppError;
use crate::ports::OutputStore;

use super::FilesystemStore;

impl OutputStore for FilesystemStore {
    fn create_new(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.contained_path(path)?;

        if full_path.exists() {
            return Err(AppError::DestinationExists(path.to_path_buf()));
        }
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = match OpenOptions::new().write(true).create_new(true).open(&full_path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(AppError::DestinationExists(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };
        write_or_remove(file, &full_path, content)
    }
}

/// Write `content` into the freshly created `path`, deleting it again on failure
/// so a retry is not refused because of a partial file.
fn write_or_remove<W: Write>(mut writer: W, path: &Path, content: &str) -> Result<(), AppError> {
    let result = writer.write_all(content.as_bytes()).and_then(|()| writer.flush());
    drop(writer);

    if let Err(err) = result {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!("Failed to remove partial file {}: {cleanup}", path.display());
        }
        return Err(err.into());
    }
    Ok(())
}
