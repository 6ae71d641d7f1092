//! Input validation errors raised by the input collector and session context.

use super::error_code::{self, RecoupErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("manager count must be between {min} and {max}, got {got}")]
    ManagersOutOfRange { got: u32, min: u32, max: u32 },

    #[error("executives per manager must be between {min} and {max}, got {got}")]
    ExecutivesOutOfRange { got: u32, min: u32, max: u32 },

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: String, value: f64 },

    #[error("{field} must be a finite number")]
    NonFiniteAmount { field: String },

    #[error("executive {id} is outside the team shape {managers}x{executives}")]
    UnknownExecutive {
        id: String,
        managers: u32,
        executives: u32,
    },

    #[error("malformed executive key: {key}")]
    MalformedKey { key: String },
}

impl RecoupErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
