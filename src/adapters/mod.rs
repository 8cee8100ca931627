pub mod filesystem;
pub mod terminal_host;

pub use filesystem::FilesystemStore;
pub use terminal_host::TerminalHost;
