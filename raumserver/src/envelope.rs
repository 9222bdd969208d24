//! JSON response envelope.
//!
//! Every request is answered with HTTP 200 and a body of the form
//!
//! ```json
//! {"requestUrl": "...", "action": "...", "error": false, "msg": "", "data": {}}
//! ```
//!
//! Failures are signalled only through `error` and `msg`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

pub const MSG_UNKNOWN_PATH: &str = "Unknown url path";
pub const MSG_UNKNOWN_ACTION: &str = "Unknown action";
pub const MSG_REJECTED: &str = "Action was rejected";

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Wire format of every response body. Field order is part of the format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub request_url: String,
    pub action: String,
    pub error: bool,
    pub msg: String,
    pub data: Value,
}

impl ResponseEnvelope {
    pub fn new(
        request_url: impl Into<String>,
        action: impl Into<String>,
        msg: impl Into<String>,
        error: bool,
        data: Value,
    ) -> Self {
        Self {
            request_url: request_url.into(),
            action: action.into(),
            error,
            msg: msg.into(),
            data,
        }
    }

    /// The path is not one the server handles. No action could be resolved,
    /// so `action` is empty.
    pub fn unknown_path(request_url: &str) -> Self {
        Self::new(request_url, "", MSG_UNKNOWN_PATH, true, json!({}))
    }

    pub fn unknown_action(request_url: &str, action: &str) -> Self {
        Self::new(request_url, action, MSG_UNKNOWN_ACTION, true, json!({}))
    }

    pub fn fulfilled(request_url: &str, action: &str, data: Value) -> Self {
        Self::new(request_url, action, "", false, data)
    }

    pub fn rejected(request_url: &str, action: &str, data: Value) -> Self {
        Self::new(request_url, action, MSG_REJECTED, true, data)
    }
}

/// A complete HTTP answer: headers in application order, then the body.
/// The status is always 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    headers: Vec<(String, String)>,
    body: String,
}

impl ActionResponse {
    /// Serialize `envelope` into a response carrying only the JSON content type.
    pub fn from_envelope(envelope: &ResponseEnvelope) -> Self {
        let body = serde_json::to_string(envelope).unwrap_or_else(|e| {
            error!(error = %e, "Failed to serialize response envelope");
            json!({
                "requestUrl": envelope.request_url,
                "action": envelope.action,
                "error": true,
                "msg": MSG_REJECTED,
                "data": {},
            })
            .to_string()
        });

        Self {
            headers: vec![(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string())],
            body,
        }
    }

    /// Apply additional headers. A header whose name matches one already set
    /// (ignoring ASCII case) replaces it.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            let name = name.into();
            let value = value.into();
            match self
                .headers
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
            {
                Some(slot) => *slot = (name, value),
                None => self.headers.push((name, value)),
            }
        }
        self
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Value of the named header, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_parts(self) -> (Vec<(String, String)>, String) {
        (self.headers, self.body)
    }
}
