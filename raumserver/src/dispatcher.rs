//! Request dispatch.
//!
//! Each request runs through the same sequence:
//!
//! ```text
//! Received -> PathMatched | PathRejected
//!          -> ActionResolved | ActionUnknown
//!          -> Fulfilled | Rejected
//!          -> ResponseSent
//! ```
//!
//! Every branch produces exactly one [`ActionResponse`].

use std::sync::Arc;

use raumkernel::{Kernel, ManagerDisposer};
use tracing::{debug, info_span, warn, Instrument, Span};

use crate::action::{new_from_action, ActionContext};
use crate::envelope::{ActionResponse, ResponseEnvelope};
use crate::request::parse_request_url;

/// Routes parsed requests to action handlers and builds their responses.
///
/// Cheap to share: the only state is the kernel handle and static headers.
pub struct Dispatcher {
    disposer: Arc<dyn ManagerDisposer>,
    kernel_version: String,
    default_headers: Vec<(String, String)>,
}

impl Dispatcher {
    /// Dispatcher over an initialised kernel.
    pub fn new(kernel: &dyn Kernel, default_headers: Vec<(String, String)>) -> Self {
        Self::from_disposer(kernel.manager_disposer(), kernel.version(), default_headers)
    }

    pub fn from_disposer(
        disposer: Arc<dyn ManagerDisposer>,
        kernel_version: impl Into<String>,
        default_headers: Vec<(String, String)>,
    ) -> Self {
        Self {
            disposer,
            kernel_version: kernel_version.into(),
            default_headers,
        }
    }

    /// Handle one request target (path plus query) received with `method`.
    pub async fn dispatch(&self, method: &str, url: &str) -> ActionResponse {
        let span = info_span!("request", method, url);
        self.handle(url).instrument(span).await
    }

    async fn handle(&self, url: &str) -> ActionResponse {
        debug!("Request received");

        let Some(request) = parse_request_url(url) else {
            debug!("Unknown url path");
            return self.respond(&ResponseEnvelope::unknown_path(url), Vec::new());
        };
        debug!(kind = request.kind.as_str(), action = %request.action, "Request to raumserver recognized");

        let Some(action) = new_from_action(&request.action) else {
            warn!(action = %request.action, "Action is not a valid action");
            return self.respond(
                &ResponseEnvelope::unknown_action(url, &request.action),
                Vec::new(),
            );
        };
        debug!(action = %request.action, query = ?request.query, "Handle action");

        let name = request.action.clone();
        let ctx = ActionContext::new(
            request,
            self.disposer.clone(),
            self.kernel_version.clone(),
            Span::current(),
        );

        let outcome = action.run(&ctx).await;
        let headers = action.return_headers();

        match outcome {
            Ok(data) => {
                debug!(action = %name, "Action fulfilled");
                self.respond(&ResponseEnvelope::fulfilled(url, &name, data), headers)
            }
            Err(e) => {
                warn!(action = %name, error = %e, "Action was rejected");
                self.respond(&ResponseEnvelope::rejected(url, &name, e.payload()), headers)
            }
        }
    }

    fn respond(&self, envelope: &ResponseEnvelope, action_headers: Vec<(String, String)>) -> ActionResponse {
        ActionResponse::from_envelope(envelope)
            .with_headers(self.default_headers.iter().cloned())
            .with_headers(action_headers)
    }
}
