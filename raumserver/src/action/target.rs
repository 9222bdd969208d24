//! Renderer resolution shared by all renderer actions.

use std::sync::Arc;

use raumkernel::MediaRenderer;
use tracing::debug;

use super::{Action, ActionContext, ActionError};

/// Query parameter naming the room (name or UDN)
pub const PARAM_ID: &str = "id";
/// Accepted alias of [`PARAM_ID`]
pub const PARAM_ROOM: &str = "room";
pub const PARAM_SCOPE: &str = "scope";

/// Which renderer of a room an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererScope {
    /// The virtual renderer of the zone the room is in
    Zone,
    /// The room's own renderer
    Room,
}

impl RendererScope {
    /// Read the `scope` parameter; absent means [`RendererScope::Zone`].
    pub fn from_context(ctx: &ActionContext) -> Result<Self, ActionError> {
        match ctx.param(PARAM_SCOPE) {
            None | Some("zone") => Ok(RendererScope::Zone),
            Some("room") => Ok(RendererScope::Room),
            Some(other) => Err(ActionError::invalid(
                PARAM_SCOPE,
                other,
                "expected 'zone' or 'room'",
            )),
        }
    }
}

/// Find the renderer the request addresses.
///
/// Rejects before touching the kernel if the room id is missing, the scope
/// is unknown, or `scope=room` is requested for an action that does not
/// allow room renderers.
pub async fn resolve_renderer(
    ctx: &ActionContext,
    action: &dyn Action,
) -> Result<Arc<dyn MediaRenderer>, ActionError> {
    let id = ctx
        .param(PARAM_ID)
        .or_else(|| ctx.param(PARAM_ROOM))
        .ok_or(ActionError::MissingParameter(PARAM_ID))?;

    let scope = RendererScope::from_context(ctx)?;
    if scope == RendererScope::Room && !action.is_allowed_for_room_renderer() {
        return Err(ActionError::NotAllowedForRoomRenderer(ctx.action().to_string()));
    }

    let disposer = ctx.manager_disposer();
    let renderer = match scope {
        RendererScope::Zone => disposer.virtual_renderer_for_room(id).await?,
        RendererScope::Room => disposer.room_renderer(id).await?,
    };

    let renderer = renderer.ok_or_else(|| ActionError::RendererNotFound(id.to_string()))?;
    debug!(parent: ctx.span(), id, ?scope, udn = renderer.udn(), "Resolved renderer");
    Ok(renderer)
}
