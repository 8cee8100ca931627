//! List command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_list(root: &Path, plain: bool) -> Result<(), AppError> {
    let templates = crate::app::api::list_at(root)?;

    if plain {
        for template in &templates {
            println!("{}", template.label);
        }
        return Ok(());
    }

    if templates.is_empty() {
        println!("No templates found.");
        return Ok(());
    }

    let width = templates.iter().map(|t| t.label.chars().count()).max().unwrap_or(0);
    for template in &templates {
        let source = template.source.strip_prefix(root).unwrap_or(&template.source);
        println!(
            "{:>4}  {:<width$}  {:<8}  {}  ({})",
            template.priority,
            template.label,
            template.extension,
            template.placeholders.join(", "),
            source.display(),
        );
    }
    Ok(())
}
