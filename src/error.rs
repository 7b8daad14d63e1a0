//! Error types for unoutline library.

use std::io;
use thiserror::Error;

/// Result type alias for unoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// The document has no pages at all.
    #[error("Document has no pages")]
    EmptyDocument,

    /// I/O error when reading page text or writing results.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page renderer could not produce pages for a document.
    #[error("Failed to render pages for {id}: {message}")]
    Source {
        /// Document identifier
        id: String,
        /// What went wrong
        message: String,
    },

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A configuration value was rejected.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyDocument;
        assert_eq!(err.to_string(), "Document has no pages");

        let err = Error::Source {
            id: "report".to_string(),
            message: "pdftotext exited with status 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to render pages for report: pdftotext exited with status 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
