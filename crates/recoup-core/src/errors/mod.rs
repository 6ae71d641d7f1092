pub mod error_code;

mod config_error;
mod export_error;
mod validation_error;

pub use config_error::ConfigError;
pub use error_code::RecoupErrorCode;
pub use export_error::ExportError;
pub use validation_error::ValidationError;

/// Top-level error for every fallible Recoup operation.
#[derive(Debug, thiserror::Error)]
pub enum RecoupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("unknown sample profile: {name}")]
    UnknownProfile { name: String },

    #[error("unknown export format: {name}")]
    UnknownFormat { name: String },
}

impl RecoupErrorCode for RecoupError {
    fn error_code(&self) -> &'static str {
        match self {
            RecoupError::Config(e) => e.error_code(),
            RecoupError::Validation(e) => e.error_code(),
            RecoupError::Export(e) => e.error_code(),
            RecoupError::UnknownProfile { .. } => error_code::UNKNOWN_PROFILE,
            RecoupError::UnknownFormat { .. } => error_code::UNKNOWN_FORMAT,
        }
    }
}

pub type RecoupResult<T> = Result<T, RecoupError>;
