//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemStore, TerminalHost};
use crate::app::{
    AppContext,
    commands::{list, new, show},
    config::load_config,
};

pub use crate::app::commands::list::TemplateSummary;
pub use crate::app::commands::new::{CreateOptions, CreateOutcome};
pub use crate::app::session::CreatedFile;
pub use crate::domain::{AppError, TemplateDescriptor};

type FilesystemContext = AppContext<FilesystemStore, FilesystemStore, TerminalHost>;

/// Create an `AppContext` for a project root.
fn create_context(root: &Path, selected: Option<PathBuf>) -> Result<FilesystemContext, AppError> {
    if !root.is_dir() {
        return Err(AppError::InvalidPath(format!(
            "Project root is not a directory: {}",
            root.display()
        )));
    }

    let config = load_config(root)?;
    let store = FilesystemStore::new(root.to_path_buf(), config.templates.clone());
    let host = TerminalHost::new(root.to_path_buf(), &config.output.default_directory)
        .with_selection(selected)
        .with_open_command(config.host.open_command.clone());

    Ok(AppContext::new(root.to_path_buf(), config, store.clone(), store, host))
}

/// List templates of the project in the current directory.
pub fn list() -> Result<Vec<TemplateSummary>, AppError> {
    list_at(&std::env::current_dir()?)
}

/// List templates of the project at `root`, in menu order.
pub fn list_at(root: &Path) -> Result<Vec<TemplateSummary>, AppError> {
    let ctx = create_context(root, None)?;
    list::execute(&ctx)
}

/// Parse a single template of the project in the current directory.
pub fn show(label: &str) -> Result<TemplateDescriptor, AppError> {
    show_at(&std::env::current_dir()?, label)
}

/// Parse a single template of the project at `root`.
pub fn show_at(root: &Path, label: &str) -> Result<TemplateDescriptor, AppError> {
    let ctx = create_context(root, None)?;
    show::execute(&ctx, label)
}

/// Create a file from a template in the current directory's project.
pub fn create(options: &CreateOptions) -> Result<CreateOutcome, AppError> {
    create_at(&std::env::current_dir()?, options)
}

/// Create a file from a template in the project at `root`.
pub fn create_at(root: &Path, options: &CreateOptions) -> Result<CreateOutcome, AppError> {
    let ctx = create_context(root, options.selected.clone())?;
    new::execute(&ctx, options)
}
