//! `prev` action.

use async_trait::async_trait;
use serde_json::Value;

use super::{resolve_renderer, Action, ActionContext, ActionError, ActionKind};

/// Moves the addressed zone back to its previous track.
pub struct PrevAction;

#[async_trait]
impl Action for PrevAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Prev
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        let renderer = resolve_renderer(ctx, self).await?;
        Ok(renderer.prev().await?)
    }
}
