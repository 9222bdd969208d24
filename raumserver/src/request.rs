//! Parsing of inbound request URLs.
//!
//! Only two path families are handled by the server:
//!
//! ```text
//! /raumserver/controller/{action}?{query}
//! /raumserver/data/{action}?{query}
//! ```

use std::collections::HashMap;

pub const CONTROLLER_PREFIX: &str = "/raumserver/controller/";
pub const DATA_PREFIX: &str = "/raumserver/data/";

/// Number of `/`-separated segments of a recognised path, counting the
/// empty segment before the leading slash.
const PATH_SEGMENTS: usize = 4;

/// Which of the two path families a request came in on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Controller,
    Data,
}

impl RequestKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::Controller => "controller",
            RequestKind::Data => "data",
        }
    }
}

/// A recognised request, built once per inbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    pub kind: RequestKind,
    /// Last path segment, possibly empty
    pub action: String,
    /// Decoded query parameters
    pub query: HashMap<String, String>,
    /// The URL exactly as received
    pub request_url: String,
}

/// Parse a request target (path plus optional query) into a [`RequestEnvelope`].
///
/// Returns `None` when the path is not one the server handles, including a
/// recognised prefix followed by more than one segment.
///
/// # Example
///
/// ```
/// use raumserver::request::parse_request_url;
///
/// let request = parse_request_url("/raumserver/controller/next?id=Kitchen").unwrap();
/// assert_eq!(request.action, "next");
/// assert_eq!(request.query["id"], "Kitchen");
///
/// assert!(parse_request_url("/foo/bar").is_none());
/// ```
pub fn parse_request_url(url: &str) -> Option<RequestEnvelope> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };

    let kind = if path.starts_with(CONTROLLER_PREFIX) {
        RequestKind::Controller
    } else if path.starts_with(DATA_PREFIX) {
        RequestKind::Data
    } else {
        return None;
    };

    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() != PATH_SEGMENTS {
        return None;
    }

    Some(RequestEnvelope {
        kind,
        action: segments[PATH_SEGMENTS - 1].to_string(),
        query: query.map(parse_query).unwrap_or_default(),
        request_url: url.to_string(),
    })
}

/// Decode a query string into a flat map. Repeated keys keep the last value.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("/raumserver/controller/next", RequestKind::Controller, "next")]
    #[case("/raumserver/data/getVersion", RequestKind::Data, "getVersion")]
    #[case("/raumserver/controller/", RequestKind::Controller, "")]
    #[case("/raumserver/controller/setVolume?id=Kitchen&value=20", RequestKind::Controller, "setVolume")]
    fn test_recognised_paths(#[case] url: &str, #[case] kind: RequestKind, #[case] action: &str) {
        let request = parse_request_url(url).expect("path should be recognised");
        assert_eq!(request.kind, kind);
        assert_eq!(request.action, action);
        assert_eq!(request.request_url, url);
    }

    #[rstest]
    #[case("/foo/bar")]
    #[case("/")]
    #[case("")]
    #[case("/raumserver")]
    #[case("/raumserver/controller")]
    #[case("/raumserver/other/next")]
    #[case("/raumserver/controller/next/extra")]
    #[case("/raumserver/data/zone/getState")]
    #[case("/raumserver/controller/next/")]
    #[case("/RAUMSERVER/controller/next")]
    fn test_rejected_paths(#[case] url: &str) {
        assert!(parse_request_url(url).is_none());
    }

    #[test]
    fn test_prefix_in_query_is_not_a_path() {
        assert!(parse_request_url("/foo?x=/raumserver/controller/next").is_none());
    }

    #[test]
    fn test_query_decoding() {
        let request =
            parse_request_url("/raumserver/controller/next?id=Living%20Room&scope=room&flag").unwrap();
        assert_eq!(request.query.len(), 3);
        assert_eq!(request.query["id"], "Living Room");
        assert_eq!(request.query["scope"], "room");
        assert_eq!(request.query["flag"], "");
    }

    #[test]
    fn test_query_plus_is_space() {
        let query = parse_query("id=Living+Room");
        assert_eq!(query["id"], "Living Room");
    }

    #[test]
    fn test_repeated_query_key_keeps_last_value() {
        let query = parse_query("id=Kitchen&id=Bedroom");
        assert_eq!(query.len(), 1);
        assert_eq!(query["id"], "Bedroom");
    }

    #[test]
    fn test_missing_query_is_empty() {
        let request = parse_request_url("/raumserver/data/getVersion").unwrap();
        assert!(request.query.is_empty());
    }

    proptest! {
        #[test]
        fn prop_paths_outside_prefixes_are_rejected(path in "/[a-z]{0,12}(/[a-z]{0,12}){0,4}") {
            prop_assume!(!path.starts_with("/raumserver/"));
            prop_assert!(parse_request_url(&path).is_none());
        }

        #[test]
        fn prop_segment_count_other_than_four_is_rejected(
            prefix in prop_oneof![Just(CONTROLLER_PREFIX), Just(DATA_PREFIX)],
            tail in proptest::collection::vec("[a-zA-Z]{1,8}", 2..5),
        ) {
            let url = format!("{}{}", prefix, tail.join("/"));
            prop_assert!(parse_request_url(&url).is_none());
        }
    }
}
