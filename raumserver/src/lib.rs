//! JSON/HTTP facade over a multiroom audio control backend.
//!
//! raumserver turns REST-style requests into renderer actions and answers
//! every one of them with the same JSON envelope. It owns no device logic:
//! rooms, zones and renderers come from a [`raumkernel::Kernel`].
//!
//! # Overview
//!
//! - [`request`]: parses `/raumserver/{controller|data}/{action}?{query}`.
//! - [`action`]: the [`Action`](action::Action) trait, the action registry
//!   and one handler per action.
//! - [`Dispatcher`]: runs a request through path matching, action lookup
//!   and the single kernel call, producing exactly one response.
//! - [`envelope`]: the `{requestUrl, action, error, msg, data}` body.
//! - [`RaumServer`]: the warp listener feeding the dispatcher.
//!
//! # Example
//!
//! ```no_run
//! use raumkernel::{Kernel, MemoryKernel, ZoneSpec};
//! use raumserver::{Dispatcher, RaumServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), raumserver::ServerError> {
//!     let kernel = MemoryKernel::new(vec![ZoneSpec::new("Downstairs", ["Kitchen", "Living"])]);
//!     kernel.init().await?;
//!
//!     let config = ServerConfig::default().with_port(8080);
//!     let dispatcher = Dispatcher::new(&kernel, config.default_headers.clone());
//!     let server = RaumServer::start(&config, dispatcher).await?;
//!
//!     // curl 'http://localhost:8080/raumserver/controller/next?id=Kitchen'
//!     tokio::signal::ctrl_c().await.ok();
//!     server.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod config;
pub mod dispatcher;
pub mod envelope;
pub mod error;
pub mod logging;
pub mod request;
pub mod server;

pub use config::{Args, ServerConfig};
pub use dispatcher::Dispatcher;
pub use envelope::{ActionResponse, ResponseEnvelope};
pub use error::ServerError;
pub use server::RaumServer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
