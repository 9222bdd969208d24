use async_trait::async_trait;
use serde_json::Value;

use super::{resolve_renderer, Action, ActionContext, ActionError, ActionKind};

/// Stops playback on the addressed zone.
pub struct StopAction;

#[async_trait]
impl Action for StopAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Stop
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        let renderer = resolve_renderer(ctx, self).await?;
        Ok(renderer.stop().await?)
    }
}
