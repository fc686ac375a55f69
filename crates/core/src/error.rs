#[derive(Debug, thiserror::Error)]
pub enum ConsultError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read catalog file: {0}")]
    CatalogRead(std::io::Error),
    #[error("catalog schema mismatch at {path}: {message}")]
    CatalogSchema { path: String, message: String },
    #[error("invalid section id {id:?}: {reason}")]
    InvalidSectionId { id: String, reason: String },
    #[error("section {0:?} has an empty title")]
    EmptySectionTitle(String),
    #[error("duplicate section id: {0}")]
    DuplicateSectionId(String),
    #[error("duplicate quickModeOrder {order} on sections {first:?} and {second:?}")]
    DuplicateQuickModeOrder {
        order: u32,
        first: String,
        second: String,
    },
    #[error("section {0:?} is fullModeOnly but declares a quickModeOrder")]
    ConflictingModeFlags(String),

    #[error("a consultation needs at least one section")]
    EmptySession,
    #[error("section index {index} is out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{operation} is not allowed while the session is {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: &'static str,
    },
}

pub type ConsultResult<T> = std::result::Result<T, ConsultError>;
