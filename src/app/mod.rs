pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod session;

pub use context::AppContext;
pub use session::{CreatedFile, Phase, Session};
