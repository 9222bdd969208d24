use raumkernel::KernelError;
use thiserror::Error;

use crate::logging::LoggingError;

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind HTTP listener: {0}")]
    Bind(String),

    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("Configuration error: {0}")]
    Config(String),
}
