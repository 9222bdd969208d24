use raumkernel::KernelError;
use serde_json::{json, Value};
use thiserror::Error;

/// Reasons an action rejects.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Required parameter '{0}' is missing")]
    MissingParameter(&'static str),

    #[error("Invalid value '{value}' for parameter '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        reason: String,
    },

    #[error("Action '{0}' is not allowed for room renderers")]
    NotAllowedForRoomRenderer(String),

    #[error("No renderer found for '{0}'")]
    RendererNotFound(String),

    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),
}

impl ActionError {
    pub fn invalid(parameter: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ActionError::MissingParameter(_) => "MissingParameter",
            ActionError::InvalidParameter { .. } => "InvalidParameter",
            ActionError::NotAllowedForRoomRenderer(_) => "NotAllowedForRoomRenderer",
            ActionError::RendererNotFound(_) => "RendererNotFound",
            ActionError::Kernel(inner) => inner.tag(),
        }
    }

    /// The `data` field of a rejected response.
    ///
    /// A renderer's own rejection payload is passed through unchanged.
    pub fn payload(&self) -> Value {
        match self {
            ActionError::Kernel(KernelError::Rejected(data)) => data.clone(),
            other => json!({
                "error": other.tag(),
                "message": other.to_string(),
            }),
        }
    }
}
