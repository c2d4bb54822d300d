use serde::Serialize;
use thiserror::Error;

/// A single failed field check, as reported by entity validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} is required"),
        }
    }
}

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("A new hero cannot already have an id")]
    IdPresentOnCreate,

    #[error("Missing hero id")]
    MissingId,

    #[error("Path id {path_id} does not match body id {body_id}")]
    IdMismatch { path_id: i64, body_id: i64 },

    #[error("Hero with id {0} not found")]
    NotFound(i64),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Invalid sort parameter: {0}")]
    InvalidSortProperty(String),
}
