use thiserror::Error;

use crate::models::attendance::Session;

#[derive(Error, Debug)]
pub enum AttendanceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{} attendance already committed", .0.title())]
    Locked(Session),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Admin password is not configured on the server")]
    Misconfigured,

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl AttendanceError {
    /// Message safe to hand back to a caller.
    ///
    /// Store and internal failures are reduced to a generic message; every
    /// other variant carries the text the caller needs to act on.
    pub fn public_message(&self) -> String {
        match self {
            AttendanceError::NotFound(msg)
            | AttendanceError::Validation(msg)
            | AttendanceError::Conflict(msg)
            | AttendanceError::Authentication(msg) => msg.clone(),
            AttendanceError::Database(_) | AttendanceError::Internal(_) => {
                "Server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type AttendanceResult<T> = Result<T, AttendanceError>;
