//! New command implementation.

use std::path::Path;

use crate::app::api::{CreateOptions, CreateOutcome};
use crate::domain::AppError;

pub fn run_new(root: &Path, options: &CreateOptions) -> Result<(), AppError> {
    match crate::app::api::create_at(root, options)? {
        CreateOutcome::Created(created) => {
            let path = created.path.strip_prefix(root).unwrap_or(&created.path);
            println!("✅ Created {} from '{}'", path.display(), created.template);
        }
        CreateOutcome::Cancelled => println!("Cancelled; no file created."),
    }
    Ok(())
}
