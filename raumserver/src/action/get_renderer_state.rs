use async_trait::async_trait;
use serde_json::Value;

use super::{resolve_renderer, Action, ActionContext, ActionError, ActionKind};

/// Reports the state of a zone or room renderer.
///
/// State changes between requests, so the response asks clients not to
/// cache it.
pub struct GetRendererStateAction;

#[async_trait]
impl Action for GetRendererStateAction {
    fn kind(&self) -> ActionKind {
        ActionKind::GetRendererState
    }

    fn is_allowed_for_room_renderer(&self) -> bool {
        true
    }

    fn return_headers(&self) -> Vec<(String, String)> {
        vec![("Cache-Control".to_string(), "no-cache".to_string())]
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        let renderer = resolve_renderer(ctx, self).await?;
        Ok(renderer.state().await?)
    }
}
