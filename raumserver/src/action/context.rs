use std::collections::HashMap;
use std::sync::Arc;

use raumkernel::ManagerDisposer;
use tracing::Span;

use crate::request::RequestEnvelope;

/// Everything an action needs for one invocation.
///
/// Built by the dispatcher from the parsed request and the shared kernel
/// handle, then passed by reference to [`super::Action::run`].
#[derive(Clone)]
pub struct ActionContext {
    action: String,
    query: HashMap<String, String>,
    disposer: Arc<dyn ManagerDisposer>,
    kernel_version: String,
    span: Span,
}

impl ActionContext {
    pub fn new(
        request: RequestEnvelope,
        disposer: Arc<dyn ManagerDisposer>,
        kernel_version: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            action: request.action,
            query: request.query,
            disposer,
            kernel_version: kernel_version.into(),
            span,
        }
    }

    /// Action name as it appeared in the request path
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Query parameter by name. Empty values count as absent.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn manager_disposer(&self) -> &Arc<dyn ManagerDisposer> {
        &self.disposer
    }

    pub fn kernel_version(&self) -> &str {
        &self.kernel_version
    }

    /// Span of the request this context belongs to
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl std::fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext")
            .field("action", &self.action)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}
