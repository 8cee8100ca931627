pub mod ports;

#[allow(unused_imports)]
pub use ports::MockOutputStore;
#[allow(unused_imports)]
pub use ports::MockTemplateSource;
#[allow(unused_imports)]
pub use ports::RecordingHost;
#[allow(unused_imports)]
pub use ports::TestFiles;
