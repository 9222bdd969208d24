//! HTTP listener forwarding every request to the [`Dispatcher`].

use std::convert::Infallible;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};
use warp::http::header::{HeaderName, HeaderValue};
use warp::http::StatusCode;
use warp::Filter;

use crate::config::ServerConfig;
use crate::dispatcher::Dispatcher;
use crate::envelope::ActionResponse;
use crate::error::ServerError;

/// Running raumserver HTTP listener.
///
/// Accepts any method on any path. Paths outside `/raumserver/controller/`
/// and `/raumserver/data/` are answered with the "unknown path" envelope.
///
/// # Example
///
/// ```no_run
/// use raumkernel::{Kernel, MemoryKernel, ZoneSpec};
/// use raumserver::{Dispatcher, RaumServer, ServerConfig};
///
/// #[tokio::main]
/// async fn main() {
///     let kernel = MemoryKernel::new(vec![ZoneSpec::new("Downstairs", ["Kitchen"])]);
///     kernel.init().await.expect("Failed to initialize kernel");
///
///     let config = ServerConfig::default();
///     let dispatcher = Dispatcher::new(&kernel, config.default_headers.clone());
///     let server = RaumServer::start(&config, dispatcher)
///         .await
///         .expect("Failed to start raumserver");
///
///     println!("Listening at: {}", server.base_url());
///     server.shutdown().await;
/// }
/// ```
pub struct RaumServer {
    /// The port the server is bound to
    port: u16,
    /// URL clients can reach the server at
    base_url: String,
    /// Shutdown signal sender
    shutdown_tx: Option<mpsc::Sender<()>>,
    /// Server task handle
    server_handle: Option<tokio::task::JoinHandle<()>>,
}

impl RaumServer {
    /// Bind the listener and start serving.
    ///
    /// Returns once the socket is bound, so requests sent after this resolves
    /// are accepted. A configured port of 0 binds a free port; see
    /// [`RaumServer::port`].
    pub async fn start(config: &ServerConfig, dispatcher: Dispatcher) -> Result<Self, ServerError> {
        let dispatcher = Arc::new(dispatcher);
        let addr = SocketAddr::new(config.bind_address, config.port);

        // Query is optional; warp rejects `query::raw` when there is none
        let raw_query = warp::query::raw()
            .map(Some)
            .or(warp::any().map(|| None::<String>))
            .unify();

        let route = warp::method()
            .and(warp::path::full())
            .and(raw_query)
            .and_then(move |method: warp::http::Method, path: warp::path::FullPath, query: Option<String>| {
                let dispatcher = dispatcher.clone();
                async move {
                    let url = match query {
                        Some(query) => format!("{}?{}", path.as_str(), query),
                        None => path.as_str().to_string(),
                    };
                    let response = dispatcher.dispatch(method.as_str(), &url).await;
                    Ok::<_, Infallible>(into_reply(response))
                }
            });

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let (bound, server) = warp::serve(route)
            .try_bind_with_graceful_shutdown(addr, async move {
                shutdown_rx.recv().await;
            })
            .map_err(|e| ServerError::Bind(format!("{addr}: {e}")))?;

        let server_handle = tokio::spawn(server);

        let host = if bound.ip().is_unspecified() {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            bound.ip()
        };
        let base_url = format!("http://{}", SocketAddr::new(host, bound.port()));

        info!(%bound, "Raumserver listening");

        Ok(Self {
            port: bound.port(),
            base_url,
            shutdown_tx: Some(shutdown_tx),
            server_handle: Some(server_handle),
        })
    }

    /// Get the port the server is bound to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:8080`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop accepting connections and wait for in-flight requests to finish.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(()).await;
        }

        if let Some(handle) = self.server_handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Server task ended abnormally");
            }
        }

        info!("Raumserver stopped");
    }
}

/// Turn an [`ActionResponse`] into an HTTP 200 reply, headers first.
fn into_reply(response: ActionResponse) -> warp::reply::Response {
    let (headers, body) = response.into_parts();

    let mut reply = warp::reply::Response::new(body.into());
    *reply.status_mut() = StatusCode::OK;

    let reply_headers = reply.headers_mut();
    for (name, value) in headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(value)) => {
                reply_headers.insert(name, value);
            }
            _ => warn!(header = %name, "Skipping invalid response header"),
        }
    }

    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::ResponseEnvelope;

    #[test]
    fn test_into_reply_sets_status_and_headers() {
        let response = ActionResponse::from_envelope(&ResponseEnvelope::unknown_path("/foo"))
            .with_headers([("Access-Control-Allow-Origin", "*")]);

        let reply = into_reply(response);
        assert_eq!(reply.status(), StatusCode::OK);
        assert_eq!(reply.headers()["content-type"], "application/json");
        assert_eq!(reply.headers()["access-control-allow-origin"], "*");
    }

    #[test]
    fn test_into_reply_skips_invalid_headers() {
        let response = ActionResponse::from_envelope(&ResponseEnvelope::unknown_path("/foo"))
            .with_headers([("Bad Header", "x"), ("X-Ok", "line\nbreak"), ("X-Good", "yes")]);

        let reply = into_reply(response);
        assert_eq!(reply.headers().len(), 2);
        assert_eq!(reply.headers()["x-good"], "yes");
    }
}
