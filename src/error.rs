//! Error type shared by the calculation core, the record I/O and the session

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, PensionError>;

#[derive(Debug, Error)]
pub enum PensionError {
    /// One or more form fields are missing or malformed
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("invalid year-month '{0}', expected YYYY-MM")]
    InvalidYearMonth(String),

    #[error("record index {index} out of range for {len} records")]
    RecordIndex { index: usize, len: usize },

    /// Action not allowed on the current screen
    #[error("cannot {action} from the {screen} screen")]
    InvalidTransition {
        action: &'static str,
        screen: &'static str,
    },

    #[error("reference table error: {0}")]
    Table(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
