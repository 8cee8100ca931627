use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{HostEnvironment, OutputStore, TemplateSource};

use super::gather_catalog;

/// One template as shown in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSummary {
    pub label: String,
    pub priority: i32,
    /// Output extension, lower-cased as it will appear in file names.
    pub extension: String,
    /// Placeholders the user fills in.
    pub placeholders: Vec<String>,
    pub source: PathBuf,
}

/// Execute the list command: templates in menu order.
pub fn execute<S, O, H>(ctx: &AppContext<S, O, H>) -> Result<Vec<TemplateSummary>, AppError>
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
{
    let catalog = gather_catalog(ctx)?;
    Ok(catalog
        .entries()
        .iter()
        .map(|descriptor| TemplateSummary {
            label: descriptor.menu_label.clone(),
            priority: descriptor.priority,
            extension: descriptor.extension().to_lowercase(),
            placeholders: descriptor.editable_keys().into_iter().map(str::to_string).collect(),
            source: descriptor.source.clone(),
        })
        .collect())
}
