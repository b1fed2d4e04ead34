use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rejected form field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {} field(s) rejected", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Unknown reference: {0}")]
    UnknownReference(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
