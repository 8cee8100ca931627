use crate::app::session::CreatedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(CreatedFile),
    /// The form was closed without submitting.
    Cancelled,
}

impl CreateOutcome {
    pub fn created(&self) -> Option<&CreatedFile> {
        match self {
            CreateOutcome::Created(file) => Some(file),
            CreateOutcome::Cancelled => None,
        }
    }
}
