//! All error types for the langsheet crate.
//!
//! These are returned from all fallible operations (parsing, serialization,
//! conversion, etc.). Per-unit failures during a directory conversion are not
//! surfaced through this enum; they are collected as skips in the
//! [`crate::codec::ConvertReport`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("invalid table: {0}")]
    InvalidTable(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found_error() {
        let error = Error::NotFound("input/translations.csv".to_string());
        assert_eq!(error.to_string(), "not found: input/translations.csv");
    }

    #[test]
    fn test_unknown_format_error() {
        let error = Error::UnknownFormat("xlsx".to_string());
        assert_eq!(error.to_string(), "unknown format `xlsx`");
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_invalid_document_error() {
        let error = Error::InvalidDocument("array value at `a.b`".to_string());
        assert_eq!(error.to_string(), "invalid document: array value at `a.b`");
    }

    #[test]
    fn test_invalid_table_error() {
        let error = Error::InvalidTable("empty table".to_string());
        assert_eq!(error.to_string(), "invalid table: empty table");
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("Validation failed");
        assert_eq!(error.to_string(), "validation error: Validation failed");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownFormat("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownFormat"));
        assert!(debug.contains("test"));
    }
}
