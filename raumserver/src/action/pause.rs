use async_trait::async_trait;
use serde_json::Value;

use super::{resolve_renderer, Action, ActionContext, ActionError, ActionKind};

/// Pauses playback on the addressed zone.
pub struct PauseAction;

#[async_trait]
impl Action for PauseAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Pause
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        let renderer = resolve_renderer(ctx, self).await?;
        Ok(renderer.pause().await?)
    }
}
