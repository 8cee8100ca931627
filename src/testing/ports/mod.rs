mod mock_output_store;
mod mock_template_source;
mod recording_host;
mod test_files;

pub use self::mock_output_store::MockOutputStore;
pub use self::mock_template_source::MockTemplateSource;
pub use self::recording_host::RecordingHost;
pub use self::test_files::TestFiles;
