//! Stable error codes for callers that match on strings (CLI exit output, JSON).

/// Every error enum provides a structured error code string.
pub trait RecoupErrorCode {
    /// Returns the error code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const UNKNOWN_PROFILE: &str = "UNKNOWN_PROFILE";
pub const UNKNOWN_FORMAT: &str = "UNKNOWN_FORMAT";
