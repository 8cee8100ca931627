use std::path::{Path, PathBuf};

use crate::domain::ToolConfig;
use crate::ports::{HostEnvironment, OutputStore, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: TemplateSource, O: OutputStore, H: HostEnvironment> {
    root: PathBuf,
    config: ToolConfig,
    templates: S,
    output: O,
    host: H,
}

impl<S: TemplateSource, O: OutputStore, H: HostEnvironment> AppContext<S, O, H> {
    /// Create a new application context.
    pub fn new(root: PathBuf, config: ToolConfig, templates: S, output: O, host: H) -> Self {
        Self { root, config, templates, output, host }
    }

    /// Project root the command operates on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Get a reference to the template source.
    pub fn templates(&self) -> &S {
        &self.templates
    }

    /// Get a reference to the output store.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a reference to the host environment.
    pub fn host(&self) -> &H {
        &self.host
    }
}
