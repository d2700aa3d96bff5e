//! Error types for the autodeck library.

use std::io;
use thiserror::Error;

/// Result type alias for autodeck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or laying out a document.
///
/// Data-quality problems (a garbled outline line, an unknown slide type in
/// structured input) never surface here; they degrade to best-effort slides.
/// Only structural failures do.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input was empty or contained only whitespace.
    #[error("Input is empty")]
    EmptyInput,

    /// The input bytes were not valid UTF-8.
    #[error("Input is not valid UTF-8: {0}")]
    Encoding(String),

    /// The requested theme name is not in the preset catalog.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// The requested layout name is not in the layout catalog.
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    /// Error serializing the document or render plan.
    #[error("Render error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput;
        assert_eq!(err.to_string(), "Input is empty");

        let err = Error::UnknownLayout("diagonal".to_string());
        assert_eq!(err.to_string(), "Unknown layout: diagonal");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
