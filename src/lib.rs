//! stencil: create source files from project-local `ScriptTemplates/` templates.
//!
//! Templates are plain text files carrying `&&KEY = VALUE&&` directive lines
//! and `##KEY##` placeholders. The crate discovers them, orders them by
//! priority, collects placeholder values and writes the rendered result to a
//! new file, never overwriting an existing one.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CreateOptions, CreateOutcome, CreatedFile, TemplateSummary, create, create_at, list, list_at,
    show, show_at,
};
pub use domain::{AppError, TemplateDescriptor, TemplateParser};
