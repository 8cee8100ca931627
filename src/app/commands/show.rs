use crate::app::AppContext;
use crate::domain::{AppError, TemplateDescriptor};
use crate::ports::{HostEnvironment, OutputStore, TemplateSource};

use super::{gather_catalog, no_templates};

/// Execute the show command: the parsed descriptor for one template.
pub fn execute<S, O, H>(
    ctx: &AppContext<S, O, H>,
    label: &str,
) -> Result<TemplateDescriptor, AppError>
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
{
    let catalog = gather_catalog(ctx)?;
    if catalog.is_empty() {
        return Err(no_templates(ctx));
    }

    catalog.find(label).cloned().ok_or_else(|| AppError::TemplateNotFound {
        name: label.to_string(),
        available: catalog.labels().join(", "),
    })
}
