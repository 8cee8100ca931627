use std::path::Path;

use log::info;

use crate::app::AppContext;
use crate::domain::config::paths;
use crate::domain::{AppError, TemplateCatalog, TemplateParser};
use crate::ports::{HostEnvironment, OutputStore, TemplateSource};

/// Discover and parse every template, returning them in menu order.
///
/// Empty documents are skipped rather than reported.
pub(crate) fn gather_catalog<S, O, H>(
    ctx: &AppContext<S, O, H>,
) -> Result<TemplateCatalog, AppError>
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
{
    let parser = TemplateParser::new(ctx.config().output.default_extension.as_str());

    let mut descriptors = Vec::new();
    for file in ctx.templates().discover()? {
        match parser.parse(&file.content, &file.path) {
            Some(descriptor) => descriptors.push(descriptor),
            None => info!("Skipping empty template {}", file.path.display()),
        }
    }

    Ok(TemplateCatalog::new(descriptors))
}

/// Error for an empty catalog, naming where discovery looked.
pub(crate) fn no_templates<S, O, H>(ctx: &AppContext<S, O, H>) -> AppError
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
{
    let templates = &ctx.config().templates;
    AppError::NoTemplates {
        root: paths::resolve(ctx.root(), Path::new(&templates.search_root)).display().to_string(),
        directory_name: templates.directory_name.clone(),
        extension: templates.extension.clone(),
    }
}
