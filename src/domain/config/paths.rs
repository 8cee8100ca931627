use std::path::{Component, Path, PathBuf};

/// File name of the optional project configuration.
pub const CONFIG_FILE: &str = "stencil.toml";

/// `<root>/stencil.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Join a configured or user-supplied `relative` path onto `root`, dropping `.` components.
pub fn resolve(root: &Path, relative: &Path) -> PathBuf {
    let mut path = root.to_path_buf();
    for component in relative.components() {
        if !matches!(component, Component::CurDir) {
            path.push(component);
        }
    }
    path
}
