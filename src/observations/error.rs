use crate::types::timestamp_format::TimestampFormat;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the observation source as a whole. Fatal for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read observation file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse observation data as JSON")]
    Parse(#[from] serde_json::Error),

    #[error("Observation data must be a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

/// Failure to decode one raw record. Recovered by skipping that record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Record is not a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Field '{field}' has the wrong type, expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Field '{field}' value '{value}' does not match timestamp format {format}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        format: TimestampFormat,
    },
}

impl DecodeError {
    /// The JSON key of the offending field, if the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DecodeError::NotAnObject { .. } => None,
            DecodeError::MissingField { field }
            | DecodeError::WrongType { field, .. }
            | DecodeError::InvalidTimestamp { field, .. } => Some(*field),
        }
    }
}
