use serde_json::Value;
use thiserror::Error;

/// Errors reported by the multiroom control layer.
///
/// A renderer call that the system itself refused (for example a UPnP fault
/// returned by the device) surfaces as [`KernelError::Rejected`] and carries
/// the payload the device sent back, so callers can hand it through untouched.
#[derive(Debug, Error)]
pub enum KernelError {
    /// A lookup or control call was made before [`crate::Kernel::init`]
    #[error("Kernel is not initialized")]
    NotInitialized,

    /// The renderer refused the call
    #[error("Renderer rejected the call: {0}")]
    Rejected(Value),

    /// The renderer or its host could not be reached
    #[error("Renderer unreachable: {0}")]
    Unreachable(String),

    /// The renderer does not implement the requested operation
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// A renderer result could not be encoded as JSON
    #[error("Failed to encode renderer result: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl KernelError {
    /// Short machine-readable tag for the error variant.
    pub fn tag(&self) -> &'static str {
        match self {
            KernelError::NotInitialized => "NotInitialized",
            KernelError::Rejected(_) => "Rejected",
            KernelError::Unreachable(_) => "Unreachable",
            KernelError::Unsupported(_) => "Unsupported",
            KernelError::Encoding(_) => "Encoding",
        }
    }
}

/// Type alias for results that can return a KernelError
pub type Result<T> = std::result::Result<T, KernelError>;
