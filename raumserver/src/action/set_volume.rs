//! `setVolume` action.
//!
//! `value` is the absolute volume, 0-100.

use async_trait::async_trait;
use serde_json::Value;

use super::{resolve_renderer, Action, ActionContext, ActionError, ActionKind};

pub const PARAM_VALUE: &str = "value";
const MAX_VOLUME: u8 = 100;

pub struct SetVolumeAction;

impl SetVolumeAction {
    fn volume(ctx: &ActionContext) -> Result<u8, ActionError> {
        let raw = ctx
            .param(PARAM_VALUE)
            .ok_or(ActionError::MissingParameter(PARAM_VALUE))?;

        let volume: u8 = raw
            .trim()
            .parse()
            .map_err(|_| ActionError::invalid(PARAM_VALUE, raw, "expected an integer between 0 and 100"))?;

        if volume > MAX_VOLUME {
            return Err(ActionError::invalid(PARAM_VALUE, raw, "expected an integer between 0 and 100"));
        }
        Ok(volume)
    }
}

#[async_trait]
impl Action for SetVolumeAction {
    fn kind(&self) -> ActionKind {
        ActionKind::SetVolume
    }

    fn is_allowed_for_room_renderer(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        // Rejected before any kernel lookup
        let volume = Self::volume(ctx)?;
        let renderer = resolve_renderer(ctx, self).await?;
        Ok(renderer.set_volume(volume).await?)
    }
}
