//! Template instantiation workflow.
//!
//! `Idle -> TemplatesGathered -> AwaitingInput -> (cancel | submit) -> Idle`.
//! The catalog is owned by the session and dropped on every return to `Idle`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::domain::template::{derive_class_name, placeholders::is_editable, render};
use crate::domain::{AppError, CLASS_NAME, TemplateCatalog, TemplateDescriptor};
use crate::ports::{HostEnvironment, OutputStore};

/// Observable workflow phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    TemplatesGathered,
    AwaitingInput,
}

impl Phase {
    fn describe(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::TemplatesGathered => "no template is selected",
            Phase::AwaitingInput => "awaiting input",
        }
    }
}

/// File written by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub path: PathBuf,
    /// Menu label of the template used.
    pub template: String,
}

#[derive(Debug)]
struct Draft {
    selected: usize,
    values: BTreeMap<String, String>,
    output_dir: PathBuf,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Gathered(TemplateCatalog),
    AwaitingInput { catalog: TemplateCatalog, draft: Draft },
}

#[derive(Debug, Default)]
pub struct Session {
    state: State,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Gathered(_) => Phase::TemplatesGathered,
            State::AwaitingInput { .. } => Phase::AwaitingInput,
        }
    }

    /// Take ownership of a freshly gathered catalog.
    pub fn gather(&mut self, catalog: TemplateCatalog) -> Result<(), AppError> {
        if self.phase() == Phase::AwaitingInput {
            return Err(self.invalid("gather templates"));
        }
        self.state = State::Gathered(catalog);
        Ok(())
    }

    pub fn catalog(&self) -> Option<&TemplateCatalog> {
        match &self.state {
            State::Idle => None,
            State::Gathered(catalog) | State::AwaitingInput { catalog, .. } => Some(catalog),
        }
    }

    /// Pick the template at `index` (menu order) and start editing its values.
    ///
    /// Switching templates keeps edits for keys the new template also declares.
    pub fn select(&mut self, index: usize, output_dir: PathBuf) -> Result<(), AppError> {
        let (catalog, previous) = match std::mem::take(&mut self.state) {
            State::Gathered(catalog) => (catalog, BTreeMap::new()),
            State::AwaitingInput { catalog, draft } => (catalog, draft.values),
            State::Idle => return Err(self.invalid("select a template")),
        };

        let Some(descriptor) = catalog.get(index) else {
            let err = AppError::TemplateNotFound {
                name: format!("#{index}"),
                available: catalog.labels().join(", "),
            };
            self.state = State::Gathered(catalog);
            return Err(err);
        };

        let values = previous
            .into_iter()
            .filter(|(key, _)| descriptor.placeholders.contains(key) && is_editable(key))
            .collect();

        self.state =
            State::AwaitingInput { catalog, draft: Draft { selected: index, values, output_dir } };
        Ok(())
    }

    pub fn selected(&self) -> Option<&TemplateDescriptor> {
        match &self.state {
            State::AwaitingInput { catalog, draft } => catalog.get(draft.selected),
            _ => None,
        }
    }

    /// Current value for `key`: the user's edit, else the template's stored value.
    pub fn value(&self, key: &str) -> Option<&str> {
        let State::AwaitingInput { catalog, draft } = &self.state else {
            return None;
        };
        draft
            .values
            .get(key)
            .map(String::as_str)
            .or_else(|| catalog.get(draft.selected).and_then(|d| d.placeholders.get(key)))
    }

    /// Edits made so far, keyed by placeholder.
    pub fn edits(&self) -> BTreeMap<String, String> {
        match &self.state {
            State::AwaitingInput { draft, .. } => draft.values.clone(),
            _ => BTreeMap::new(),
        }
    }

    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> Result<(), AppError> {
        let phase = self.phase();
        let State::AwaitingInput { catalog, draft } = &mut self.state else {
            return Err(AppError::InvalidState {
                operation: "edit values",
                state: phase.describe(),
            });
        };
        let Some(descriptor) = catalog.get(draft.selected) else {
            return Err(AppError::InvalidState {
                operation: "edit values",
                state: phase.describe(),
            });
        };

        if !is_editable(key) {
            return Err(AppError::ReadOnlyPlaceholder(key.to_string()));
        }
        if !descriptor.placeholders.contains(key) {
            return Err(AppError::UnknownPlaceholder {
                template: descriptor.menu_label.clone(),
                key: key.to_string(),
            });
        }

        draft.values.insert(key.to_string(), value.into());
        Ok(())
    }

    pub fn output_dir(&self) -> Option<&Path> {
        match &self.state {
            State::AwaitingInput { draft, .. } => Some(&draft.output_dir),
            _ => None,
        }
    }

    /// Submission is possible once `ClassName` yields a non-blank file name.
    pub fn can_submit(&self) -> bool {
        self.value(CLASS_NAME).is_some_and(is_usable_class_name)
    }

    /// Destination the current values would be written to.
    pub fn preview(&self) -> Option<PathBuf> {
        let State::AwaitingInput { catalog, draft } = &self.state else {
            return None;
        };
        let descriptor = catalog.get(draft.selected)?;
        Some(render(descriptor, &draft.values).destination(&draft.output_dir))
    }

    /// Abandon the workflow, discarding all edits.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }

    /// Render the selected template and write it.
    ///
    /// The session returns to `Idle` whether the write succeeds or is refused
    /// because the destination exists. A blank `ClassName` is rejected without
    /// leaving `AwaitingInput`.
    pub fn submit<O, H>(&mut self, output: &O, host: &H) -> Result<CreatedFile, AppError>
    where
        O: OutputStore,
        H: HostEnvironment,
    {
        if self.phase() != Phase::AwaitingInput {
            return Err(self.invalid("submit"));
        }
        if !self.can_submit() {
            return Err(AppError::MissingClassName);
        }

        let State::AwaitingInput { catalog, draft } = std::mem::take(&mut self.state) else {
            return Err(self.invalid("submit"));
        };
        let Some(descriptor) = catalog.get(draft.selected) else {
            return Err(self.invalid("submit"));
        };

        let rendered = render(descriptor, &draft.values);
        let path = rendered.destination(&draft.output_dir);
        output.create_new(&path, &rendered.content)?;
        info!("Created {} from template '{}'", path.display(), descriptor.menu_label);

        if let Err(err) = host.notify_file_created(&path) {
            warn!("{err}");
        }

        Ok(CreatedFile { path, template: descriptor.menu_label.clone() })
    }

    fn invalid(&self, operation: &'static str) -> AppError {
        AppError::InvalidState { operation, state: self.phase().describe() }
    }
}

/// `..`, `/` and blank input have no file stem to name the output after.
pub fn is_usable_class_name(raw: &str) -> bool {
    !derive_class_name(raw).trim().is_empty()
}
