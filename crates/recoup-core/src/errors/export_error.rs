//! Report export errors.

use super::error_code::{self, RecoupErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv encoding failed: {message}")]
    Csv { message: String },

    #[error("serialization failed: {message}")]
    Serialization { message: String },
}

impl RecoupErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
