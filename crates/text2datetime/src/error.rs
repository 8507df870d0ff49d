//! Error types for expression resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unrecognized format: {0}")]
    UnrecognizedFormat(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid time field: {0}")]
    InvalidTimeField(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
