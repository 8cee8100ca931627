//! Filesystem adapter implementations for store ports.
//!
//! Provides concrete adapters for `TemplateSource` and `OutputStore`. Both are
//! implemented on a single `FilesystemStore` struct that owns the project root
//! and refuses writes that would land outside it.

mod output_store;
mod template_source;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::domain::config::{TemplatesConfig, paths};

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
    templates: TemplatesConfig,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf, templates: TemplatesConfig) -> Self {
        Self { root, templates }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory scanned for template directories.
    pub fn search_root(&self) -> PathBuf {
        paths::resolve(&self.root, Path::new(&self.templates.search_root))
    }
}

impl FilesystemStore {
    /// `path` joined onto the root, refused when `..` would lead out of it.
    ///
    /// Only the path text is inspected; components need not exist yet.
    pub(crate) fn contained_path(&self, path: &Path) -> Result<PathBuf, AppError> {
        let full_path = self.root.join(path);
        if fold_dots(&full_path).starts_with(fold_dots(&self.root)) {
            Ok(full_path)
        } else {
            Err(AppError::PathTraversal(path.display().to_string()))
        }
    }
}

fn fold_dots(path: &Path) -> PathBuf {
    path.components().fold(PathBuf::new(), |mut folded, component| {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                folded.pop();
            }
            other => folded.push(other.as_os_str()),
        }
        folded
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store() -> (TempDir, FilesystemStore) {
        let dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(dir.path().to_path_buf(), TemplatesConfig::default());
        (dir, store)
    }

    #[test]
    fn paths_leaving_the_project_are_refused() {
        let (dir, store) = store();

        for escape in ["../Escape.cs", "Assets/../../Escape.cs", "Ghost/Dir/../../../Escape.cs"] {
            let err = store.contained_path(Path::new(escape)).unwrap_err();
            assert!(matches!(err, AppError::PathTraversal(ref p) if p == escape));
        }
        assert!(store.contained_path(&dir.path().join("Assets/../../Escape.cs")).is_err());
    }

    #[test]
    fn dot_dot_inside_the_project_is_allowed() {
        let (dir, store) = store();

        let path = store.contained_path(Path::new("Assets/Scripts/../Player.cs")).unwrap();
        assert_eq!(path, dir.path().join("Assets/Scripts/../Player.cs"));
        assert_eq!(fold_dots(&path), dir.path().join("Assets/Player.cs"));

        let absolute = dir.path().join("./Assets/Enemy.cs");
        assert_eq!(store.contained_path(&absolute).unwrap(), absolute);
    }
}
