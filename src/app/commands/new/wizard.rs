use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::AppContext;
use crate::app::session::{Session, is_usable_class_name};
use crate::domain::{AppError, CLASS_NAME, TemplateCatalog};
use crate::ports::{HostEnvironment, OutputStore, TemplateSource};

use super::command::{CreateOptions, output_directory};
use super::outcome::CreateOutcome;

/// User interaction needed by the create form.
pub(super) trait FormPrompter {
    /// Fill the selected template's editable values. `false` closes the form.
    fn fill(&mut self, session: &mut Session) -> Result<bool, AppError>;

    /// Ask whether to write `destination`.
    fn confirm_create(&mut self, destination: &Path) -> Result<bool, AppError>;

    /// `existing` is already present; ask whether to edit values and retry.
    fn retry_after_conflict(&mut self, existing: &Path) -> Result<bool, AppError>;
}

/// Interactive form: pick a template, fill its placeholders, confirm.
pub(super) fn run_create_wizard<S, O, H>(
    ctx: &AppContext<S, O, H>,
    catalog: TemplateCatalog,
    options: &CreateOptions,
) -> Result<CreateOutcome, AppError>
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
{
    let labels: Vec<String> = catalog
        .entries()
        .iter()
        .map(|descriptor| format!("{} ({})", descriptor.menu_label, descriptor.extension()))
        .collect();

    let selection = Select::new()
        .with_prompt("Template")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(|e| AppError::config_error(format!("Template selection failed: {e}")))?;
    let Some(index) = selection else {
        return Ok(CreateOutcome::Cancelled);
    };

    let mut carried: BTreeMap<String, String> = options.values.iter().cloned().collect();
    if let Some(class_name) = &options.class_name {
        carried.insert(CLASS_NAME.to_string(), class_name.clone());
    }

    let mut prompter = TerminalPrompter { root: ctx.root().to_path_buf() };
    run_form(ctx, &catalog, index, output_directory(ctx, options), carried, &mut prompter)
}

/// Fill, confirm and submit until a file is written or the user gives up.
///
/// When the destination already exists the user may correct the values and
/// submit again; the previous edits are carried into the next round.
pub(super) fn run_form<S, O, H, P>(
    ctx: &AppContext<S, O, H>,
    catalog: &TemplateCatalog,
    index: usize,
    output_dir: PathBuf,
    mut carried: BTreeMap<String, String>,
    prompter: &mut P,
) -> Result<CreateOutcome, AppError>
where
    S: TemplateSource,
    O: OutputStore,
    H: HostEnvironment,
    P: FormPrompter,
{
    loop {
        let mut session = Session::new();
        session.gather(catalog.clone())?;
        session.select(index, output_dir.clone())?;
        for (key, value) in &carried {
            session.set_value(key, value.as_str())?;
        }

        if !prompter.fill(&mut session)? {
            session.cancel();
            return Ok(CreateOutcome::Cancelled);
        }

        let Some(destination) = session.preview() else {
            session.cancel();
            return Ok(CreateOutcome::Cancelled);
        };
        if !prompter.confirm_create(&destination)? {
            session.cancel();
            return Ok(CreateOutcome::Cancelled);
        }

        carried = session.edits();
        match session.submit(ctx.output(), ctx.host()) {
            Ok(created) => return Ok(CreateOutcome::Created(created)),
            Err(AppError::DestinationExists(path)) => {
                if !prompter.retry_after_conflict(&path)? {
                    return Err(AppError::DestinationExists(path));
                }
            }
            Err(err) => return Err(err),
        }
    }
}

/// dialoguer-backed prompts on the attached terminal.
struct TerminalPrompter {
    root: PathBuf,
}

impl TerminalPrompter {
    fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root).unwrap_or(path).display().to_string()
    }
}

impl FormPrompter for TerminalPrompter {
    fn fill(&mut self, session: &mut Session) -> Result<bool, AppError> {
        let keys: Vec<String> = match session.selected() {
            Some(descriptor) => {
                descriptor.editable_keys().into_iter().map(str::to_string).collect()
            }
            None => return Ok(false),
        };

        for key in keys {
            let current = session.value(&key).unwrap_or_default().to_string();
            let required = key == CLASS_NAME;

            let result = Input::<String>::new()
                .with_prompt(key.as_str())
                .with_initial_text(current)
                .allow_empty(!required)
                .validate_with(move |input: &String| -> Result<(), &str> {
                    if required && !is_usable_class_name(input) {
                        Err("ClassName must not be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact_text();

            match result {
                Ok(value) => session.set_value(&key, value)?,
                Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                    return Ok(false);
                }
                Err(err) => {
                    return Err(AppError::config_error(format!("Failed to read {key}: {err}")));
                }
            }
        }

        Ok(true)
    }

    fn confirm_create(&mut self, destination: &Path) -> Result<bool, AppError> {
        println!("Creating file {}", self.display(destination));
        confirm("Create file?")
    }

    fn retry_after_conflict(&mut self, existing: &Path) -> Result<bool, AppError> {
        eprintln!("⚠️  File already exists: {}", self.display(existing));
        confirm("Edit values and try again?")
    }
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    match Confirm::new().with_prompt(prompt).default(true).interact_opt() {
        Ok(answer) => Ok(answer.unwrap_or(false)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::config_error(format!("Confirmation failed: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::domain::{TemplateParser, ToolConfig};
    use crate::testing::{MockOutputStore, MockTemplateSource, RecordingHost, TestFiles};

    /// Prompter answering from prepared scripts and recording what it saw.
    #[derive(Default)]
    struct ScriptedPrompter {
        fills: VecDeque<Vec<(&'static str, &'static str)>>,
        confirms: VecDeque<bool>,
        retries: VecDeque<bool>,
        seen_class_names: Vec<String>,
        conflicts: Vec<PathBuf>,
    }

    impl FormPrompter for ScriptedPrompter {
        fn fill(&mut self, session: &mut Session) -> Result<bool, AppError> {
            self.seen_class_names.push(session.value(CLASS_NAME).unwrap_or_default().to_string());
            let Some(values) = self.fills.pop_front() else {
                return Ok(false);
            };
            for (key, value) in values {
                session.set_value(key, value)?;
            }
            Ok(true)
        }

        fn confirm_create(&mut self, _destination: &Path) -> Result<bool, AppError> {
            Ok(self.confirms.pop_front().unwrap_or(false))
        }

        fn retry_after_conflict(&mut self, existing: &Path) -> Result<bool, AppError> {
            self.conflicts.push(existing.to_path_buf());
            Ok(self.retries.pop_front().unwrap_or(false))
        }
    }

    fn ctx(files: &TestFiles) -> AppContext<MockTemplateSource, MockOutputStore, RecordingHost> {
        AppContext::new(
            PathBuf::from("/project"),
            ToolConfig::default(),
            MockTemplateSource::new(),
            MockOutputStore::new(files.clone()),
            RecordingHost::new("/project/Assets"),
        )
    }

    fn catalog() -> TemplateCatalog {
        let notes = TemplateParser::default()
            .parse("&&EXTENSION=.md&&\n# ##ClassName## (##Author##)\n", "Notes.fpst")
            .unwrap();
        TemplateCatalog::new(vec![notes])
    }

    fn run(
        files: &TestFiles,
        carried: BTreeMap<String, String>,
        prompter: &mut ScriptedPrompter,
    ) -> Result<CreateOutcome, AppError> {
        run_form(&ctx(files), &catalog(), 0, PathBuf::from("/project/Assets"), carried, prompter)
    }

    #[test]
    fn conflict_can_be_corrected_and_keeps_edits() {
        let files = TestFiles::new();
        files.add("/project/Assets/Plan.md", "existing");
        let mut prompter = ScriptedPrompter {
            fills: VecDeque::from([
                vec![("ClassName", "Plan"), ("Author", "Ada")],
                vec![("ClassName", "Roadmap")],
            ]),
            confirms: VecDeque::from([true, true]),
            retries: VecDeque::from([true]),
            ..Default::default()
        };

        let outcome = run(&files, BTreeMap::new(), &mut prompter).unwrap();

        let created = outcome.created().unwrap();
        assert_eq!(created.path, PathBuf::from("/project/Assets/Roadmap.md"));
        assert_eq!(files.read("/project/Assets/Roadmap.md").unwrap(), "# Roadmap (Ada)\n");
        assert_eq!(files.read("/project/Assets/Plan.md").unwrap(), "existing");
        assert_eq!(prompter.conflicts, vec![PathBuf::from("/project/Assets/Plan.md")]);
        assert_eq!(prompter.seen_class_names, vec!["", "Plan"]);
    }

    #[test]
    fn declining_retry_reports_the_conflict() {
        let files = TestFiles::new();
        files.add("/project/Assets/Plan.md", "existing");
        let mut prompter = ScriptedPrompter {
            fills: VecDeque::from([vec![("ClassName", "Plan")]]),
            confirms: VecDeque::from([true]),
            retries: VecDeque::from([false]),
            ..Default::default()
        };

        let err = run(&files, BTreeMap::new(), &mut prompter).unwrap_err();

        assert!(matches!(err, AppError::DestinationExists(_)));
        assert_eq!(files.read("/project/Assets/Plan.md").unwrap(), "existing");
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn closing_the_form_writes_nothing() {
        let files = TestFiles::new();
        let carried = BTreeMap::from([("ClassName".to_string(), "Draft".to_string())]);
        let mut prompter = ScriptedPrompter {
            fills: VecDeque::from([vec![]]),
            confirms: VecDeque::from([false]),
            ..Default::default()
        };

        let outcome = run(&files, carried, &mut prompter).unwrap();

        assert_eq!(outcome, CreateOutcome::Cancelled);
        assert_eq!(prompter.seen_class_names, vec!["Draft"]);
        assert_eq!(files.len(), 0);
    }
}
