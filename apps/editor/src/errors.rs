use thiserror::Error;

use crate::models::Section;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("No {section} row at position {position} (section has {len})")]
    RowOutOfRange {
        section: Section,
        position: usize,
        len: usize,
    },

    #[error("Unknown tab: {0}")]
    UnknownTab(String),
}
