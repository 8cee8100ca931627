mod host_environment;
mod output_store;
mod template_source;

pub use host_environment::HostEnvironment;
pub use output_store::OutputStore;
pub use template_source::TemplateSource;
