mod gather;
pub mod list;
pub mod new;
pub mod show;

pub(crate) use gather::{gather_catalog, no_templates};
