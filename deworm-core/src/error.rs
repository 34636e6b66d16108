//! Error types for deworm.

use thiserror::Error;

/// Errors that can occur in deworm operations.
#[derive(Error, Debug)]
pub enum DewormError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{0} is in the future. Enter the date you last dewormed")]
    FutureDate(chrono::NaiveDate),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for deworm operations.
pub type DewormResult<T> = Result<T, DewormError>;
