use std::io::IsTerminal;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::{gather_catalog, no_templates};
use crate::app::session::Session;
use crate::domain::config::paths;
use crate::domain::{AppError, CLASS_NAME, TemplateCatalog};
use crate::ports::{HostEnvironment, OutputStore, TemplateSource};

use super::outcome::CreateOutcome;
use super::wizard::run_create_wizard;

/// Inputs for the new command.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Menu label of the template; prompts when absent on a TTY.
    pub template: Option<String>,
    pub class_name: Option<String>,
    /// Additional `KEY=VALUE` placeholder assignments.
    pub values: Vec<(String, String)>,
    /// Output directory, relative to the project root; overrides the selection.
    pub directory: Option<PathBuf>,
    /// Entry selected in the host, used to pick the default output directory.
    pub selected: Option<PathBuf>,
}

/// Execute the new command.
///
/// Runs the interactive form when no template is named and a terminal is
/// attached; otherwise everything must come from `options`.
pub fn execute<S, O, H>(
    ctx: &AppContext<S, O, H>,
    options: &CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
{
    let catalog = gather_catalog(ctx)?;
    if catalog.is_empty() {
        return Err(no_templates(ctx));
    }

    match options.template.as_deref() {
        Some(label) => create_from_template(ctx, catalog, label, options),
        None => {
            if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
                return Err(AppError::config_error(format!(
                    "Template is required when running non-interactively. \
                     Use --template with one of: {}",
                    catalog.labels().join(", ")
                )));
            }
            run_create_wizard(ctx, catalog, options)
        }
    }
}

pub(super) fn create_from_template<S, O, H>(
    ctx: &AppContext<S, O, H>,
    catalog: TemplateCatalog,
    label: &str,
    options: &CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
{
    let index = catalog.position(label).ok_or_else(|| AppError::TemplateNotFound {
        name: label.to_string(),
        available: catalog.labels().join(", "),
    })?;

    let mut session = Session::new();
    session.gather(catalog)?;
    session.select(index, output_directory(ctx, options))?;

    if let Some(class_name) = &options.class_name {
        session.set_value(CLASS_NAME, class_name.as_str())?;
    }
    for (key, value) in &options.values {
        session.set_value(key, value.as_str())?;
    }

    let created = session.submit(ctx.output(), ctx.host())?;
    Ok(CreateOutcome::Created(created))
}

/// `--dir` when given, else whatever the host resolves from its selection.
pub(super) fn output_directory<S, O, H>(
    ctx: &AppContext<S, O, H>,
    options: &CreateOptions,
) -> PathBuf
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
{
    match &options.directory {
        Some(dir) => paths::resolve(ctx.root(), dir),
        None => ctx.host().resolve_default_directory(),
    }
}
