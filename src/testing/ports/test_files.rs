//! Shared in-memory file backing store for port-scoped test doubles.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory file storage shared across port-scoped test doubles.
///
/// Tests seed files through this handle, hand a clone to `MockOutputStore`,
/// and inspect what production code wrote afterwards.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    #[allow(dead_code)]
    pub fn add(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}
