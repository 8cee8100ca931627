pub mod parse;
pub mod paths;
pub mod tool_config;

pub use parse::parse_config_content;
pub use tool_config::{HostConfig, OutputConfig, TemplatesConfig, ToolConfig};
