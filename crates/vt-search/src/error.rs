//! Search error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The corpus file could not be read.
    #[error("corpus I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus line is not a valid claim record.
    #[error("corpus line {line}: {message}")]
    Parse { line: usize, message: String },
}
