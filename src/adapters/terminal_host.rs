use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::domain::AppError;
use crate::domain::config::paths;
use crate::ports::HostEnvironment;

/// Host adapter for running from a shell.
///
/// The selection context is an optional path handed over by the caller (an
/// editor integration passes the entry focused in its file tree). After a
/// write, the configured open command is run with the new file as its last
/// argument.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    root: PathBuf,
    default_directory: PathBuf,
    selected: Option<PathBuf>,
    open_command: Option<String>,
}

impl TerminalHost {
    pub fn new(root: PathBuf, default_directory: impl AsRef<Path>) -> Self {
        let default_directory = paths::resolve(&root, default_directory.as_ref());
        Self { root, default_directory, selected: None, open_command: None }
    }

    /// Entry currently selected in the host, relative to the root or absolute.
    pub fn with_selection(mut self, selected: Option<PathBuf>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_open_command(mut self, open_command: Option<String>) -> Self {
        self.open_command = open_command.filter(|command| !command.trim().is_empty());
        self
    }

    fn open(&self, command_line: &str, path: &Path) -> Result<(), AppError> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next().unwrap_or_default();

        let mut command = Command::new(program);
        command.args(parts).arg(path).current_dir(&self.root);

        let status = command.status().map_err(|e| AppError::HostNotification {
            path: path.display().to_string(),
            details: format!("failed to run '{command_line}': {e}"),
        })?;

        if !status.success() {
            return Err(AppError::HostNotification {
                path: path.display().to_string(),
                details: format!("'{command_line}' exited with {status}"),
            });
        }
        Ok(())
    }
}

impl HostEnvironment for TerminalHost {
    fn resolve_default_directory(&self) -> PathBuf {
        let Some(selected) = &self.selected else {
            return self.default_directory.clone();
        };

        let selected = paths::resolve(&self.root, selected);
        if selected.is_dir() {
            return selected;
        }
        if selected.is_file() || selected.extension().is_some() {
            return selected.parent().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone());
        }
        selected
    }

    fn notify_file_created(&self, path: &Path) -> Result<(), AppError> {
        debug!("No file index to refresh for {}", path.display());
        match &self.open_command {
            Some(command_line) => {
                info!("Opening {} with '{}'", path.display(), command_line);
                self.open(command_line, path)
            }
            None => Ok(()),
        }
    }
}
