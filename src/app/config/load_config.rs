//! Project configuration loading from disk.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::AppError;
use crate::domain::config::{self, ToolConfig};

/// Load `stencil.toml` from `root`, falling back to defaults when absent.
pub fn load_config(root: &Path) -> Result<ToolConfig, AppError> {
    let config_path = config::paths::config(root);
    if !config_path.exists() {
        debug!("No {} found; using defaults", config_path.display());
        return Ok(ToolConfig::default());
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    config::parse_config_content(&content).map_err(|err| match err {
        AppError::Configuration(message) => {
            AppError::config_error(format!("{}: {message}", config_path.display()))
        }
        other => other,
    })
}
