//! Shared testing harness for `stencil` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty `Assets/` folder.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(work_dir.join("Assets")).expect("Failed to create test project");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `stencil` binary within the project.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stencil").expect("Failed to locate stencil binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a template under `<dir>/ScriptTemplates/<name>.fpst`.
    pub(crate) fn add_template(&self, dir: &str, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(dir).join("ScriptTemplates").join(format!("{name}.fpst"));
        self.write(&path, content);
        path
    }

    /// Write `stencil.toml` at the project root.
    pub(crate) fn write_config(&self, content: &str) {
        self.write(&self.work_dir.join("stencil.toml"), content);
    }

    pub(crate) fn write(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub(crate) fn assert_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(path.exists(), "{} should exist", path.display());
    }

    pub(crate) fn assert_not_exists(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(!path.exists(), "{} should not exist", path.display());
    }

    /// Standard Unity-style fixture: a MonoBehaviour and a plain text template.
    pub(crate) fn add_default_templates(&self) {
        self.add_template(
            "Assets/Editor",
            "MonoBehaviour",
            concat!(
                "&&MENUNAME=MonoBehaviour&&\n",
                "&&PRIORITY=10&&\n",
                "// Copyright ##Year##\n",
                "using UnityEngine;\n",
                "\n",
                "namespace ##Namespace##\n",
                "{\n",
                "    public class ##ClassName## : MonoBehaviour {}\n",
                "}\n",
            ),
        );
        self.add_template("Assets/Editor", "Readme", "&&EXTENSION=.TXT&&\n##ClassName##\n");
    }
}

