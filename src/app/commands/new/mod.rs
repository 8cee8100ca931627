pub mod command;
pub mod outcome;
mod wizard;

pub use command::{CreateOptions, execute};
pub use outcome::CreateOutcome;
