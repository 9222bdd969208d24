//! `next` action.

use async_trait::async_trait;
use serde_json::Value;

use super::{resolve_renderer, Action, ActionContext, ActionError, ActionKind};

/// Skips the addressed zone to its next track.
pub struct NextAction;

#[async_trait]
impl Action for NextAction {
    fn kind(&self) -> ActionKind {
        ActionKind::Next
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        let renderer = resolve_renderer(ctx, self).await?;
        Ok(renderer.next().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::parse_request_url;
    use raumkernel::{Kernel, MemoryKernel, ZoneSpec};
    use tracing::Span;

    #[tokio::test]
    async fn test_next_advances_zone_track() {
        let kernel = MemoryKernel::new(vec![ZoneSpec::new("Downstairs", ["Kitchen"])]);
        kernel.init().await.unwrap();
        let ctx = ActionContext::new(
            parse_request_url("/raumserver/controller/next?id=Kitchen").unwrap(),
            kernel.manager_disposer(),
            kernel.version(),
            Span::none(),
        );

        let data = NextAction.run(&ctx).await.unwrap();
        assert_eq!(data["track"], 2);
        assert_eq!(data["udn"], "uuid:zone-downstairs");

        // The room's own renderer is untouched
        let room = kernel.memory_disposer().memory_room("Kitchen").unwrap();
        assert_eq!(room.snapshot().track, 1);
    }
}
