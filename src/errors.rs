use std::result::Result as StdResult;

use thiserror::Error;

use crate::parse::ParseError;

/// Unified error type for domain/storage/service layers.
#[derive(Error, Debug)]
pub enum TripError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
}

pub type Result<T> = StdResult<T, TripError>;

impl From<ParseError> for TripError {
    fn from(err: ParseError) -> Self {
        TripError::InvalidInput(err.to_string())
    }
}

impl From<std::io::Error> for TripError {
    fn from(err: std::io::Error) -> Self {
        TripError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for TripError {
    fn from(err: serde_json::Error) -> Self {
        TripError::StorageError(err.to_string())
    }
}
