//! Show command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_show(root: &Path, label: &str) -> Result<(), AppError> {
    let descriptor = crate::app::api::show_at(root, label)?;

    println!("Template:  {}", descriptor.menu_label);
    let source = descriptor.source.strip_prefix(root).unwrap_or(&descriptor.source);
    println!("Source:    {}", source.display());
    println!("Priority:  {}", descriptor.priority);
    println!("Directives:");
    for (key, value) in &descriptor.directives {
        println!("  {key} = {value}");
    }
    println!("Placeholders:");
    for (key, value) in descriptor.placeholders.iter() {
        if value.is_empty() {
            println!("  {key}");
        } else {
            println!("  {key} = {value}");
        }
    }
    println!("---");
    print!("{}", descriptor.body);
    if !descriptor.body.ends_with('\n') {
        println!();
    }
    Ok(())
}
