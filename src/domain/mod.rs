pub mod config;
pub mod error;
pub mod template;

pub use config::ToolConfig;
pub use error::AppError;
pub use template::{
    CLASS_NAME, Placeholders, RenderedFile, TemplateCatalog, TemplateDescriptor, TemplateFile,
    TemplateParser, YEAR,
};
