//! Action handlers.
//!
//! Each action named in a request URL maps to one handler value implementing
//! [`Action`]. The dispatcher creates a fresh handler per request through
//! [`new_from_action`], hands it an [`ActionContext`], awaits [`Action::run`]
//! once and turns the outcome into a response envelope.

mod context;
mod error;
mod registry;
mod target;

mod get_renderer_state;
mod get_version;
mod mute;
mod next;
mod pause;
mod play;
mod prev;
mod set_volume;
mod stop;

use async_trait::async_trait;
use serde_json::Value;

pub use context::ActionContext;
pub use error::ActionError;
pub use registry::{new_from_action, ActionKind};
pub use target::{resolve_renderer, RendererScope};

pub use get_renderer_state::GetRendererStateAction;
pub use get_version::GetVersionAction;
pub use mute::MuteAction;
pub use next::NextAction;
pub use pause::PauseAction;
pub use play::PlayAction;
pub use prev::PrevAction;
pub use set_volume::SetVolumeAction;
pub use stop::StopAction;

/// Common interface of all action handlers.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use raumserver::action::{Action, ActionContext, ActionError, ActionKind};
/// use serde_json::{json, Value};
///
/// struct Ping;
///
/// #[async_trait]
/// impl Action for Ping {
///     fn kind(&self) -> ActionKind { ActionKind::GetVersion }
///     async fn run(&self, _ctx: &ActionContext) -> Result<Value, ActionError> {
///         Ok(json!("pong"))
///     }
/// }
/// ```
#[async_trait]
pub trait Action: Send + Sync {
    /// Registry entry this handler was created for
    fn kind(&self) -> ActionKind;

    /// Whether the action may target a single room's renderer
    /// (`scope=room`) instead of the zone's virtual renderer.
    fn is_allowed_for_room_renderer(&self) -> bool {
        false
    }

    /// Extra headers to send back with the response
    fn return_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Perform the action. Resolves exactly once; never retried.
    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError>;
}
