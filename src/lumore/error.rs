use crate::filters::{DecodeError, ParseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LumoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Filter(#[from] ParseError),

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    /// Non-2xx answer from the admin API.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
}

impl LumoreError {
    /// HTTP status of an API failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LumoreError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LumoreError>;
