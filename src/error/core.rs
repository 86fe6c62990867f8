use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the stackgrid crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced while painting layouts or reporting on them.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
