//! Pure parse/validate for project configuration (`stencil.toml`).

use crate::domain::AppError;
use crate::domain::config::ToolConfig;

/// Parse and validate project configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ToolConfig, AppError> {
    let config: ToolConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn config_parses_from_toml() {
        let toml = r#"
[templates]
search_root = "Assets"
extension = "tpl"

[output]
default_extension = ".txt"
default_directory = "Assets/Scripts"

[host]
open_command = "code"
"#;
        let config = parse_config_content(toml).unwrap();
        assert_eq!(config.templates.search_root, "Assets");
        assert_eq!(config.templates.directory_name, "ScriptTemplates");
        assert_eq!(config.templates.extension, "tpl");
        assert_eq!(config.output.default_extension, ".txt");
        assert_eq!(config.output.default_directory, "Assets/Scripts");
        assert_eq!(config.host.open_command.as_deref(), Some("code"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = parse_config_content("[templates]\nfolder = \"x\"\n");
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let result = parse_config_content("[templates]\ndirectory_name = \"\"\n");
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
