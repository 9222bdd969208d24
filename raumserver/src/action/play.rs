use async_trait::async_trait;
use serde_json::Value;

use super::{resolve_renderer, Action, ActionContext, ActionError, ActionKind};

/// Starts playback on the addressed zone.
pub struct PlayAction;

#[async_trait]
impl Action for PlayAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Play
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        let renderer = resolve_renderer(ctx, self).await?;
        Ok(renderer.play().await?)
    }
}
