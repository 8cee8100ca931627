//! `TemplateSource` implementation for `FilesystemStore`.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::domain::{AppError, TemplateFile};
use crate::ports::TemplateSource;

use super::FilesystemStore;

impl TemplateSource for FilesystemStore {
    fn discover(&self) -> Result<Vec<TemplateFile>, AppError> {
        let search_root = self.search_root();
        if !search_root.is_dir() {
            return Err(AppError::InvalidPath(format!(
                "Template search root is not a directory: {}",
                search_root.display()
            )));
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&search_root).follow_links(false).sort_by_file_name();
        for entry in walker {
            let entry = entry?;
            let is_template_dir = entry.file_type().is_dir()
                && entry.file_name() == self.templates.directory_name.as_str();
            if !is_template_dir {
                continue;
            }

            debug!("Scanning template directory {}", entry.path().display());
            for path in self.template_files_in(entry.path())? {
                debug!("Reading template {}", path.display());
                let content = fs::read_to_string(&path)?;
                files.push(TemplateFile::new(path, content));
            }
        }

        Ok(files)
    }
}

impl FilesystemStore {
    /// Template files directly inside `dir`, sorted by name.
    fn template_files_in(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let matches = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.templates.extension));
            if matches {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }
}
