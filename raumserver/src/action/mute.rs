//! `mute` and `unmute` actions.

use async_trait::async_trait;
use serde_json::Value;

use super::{resolve_renderer, Action, ActionContext, ActionError, ActionKind};

/// Sets the mute state of a zone or, with `scope=room`, a single room.
pub struct MuteAction {
    mute: bool,
}

impl MuteAction {
    pub fn mute() -> Self {
        Self { mute: true }
    }

    pub fn unmute() -> Self {
        Self { mute: false }
    }
}

#[async_trait]
impl Action for MuteAction {
    fn kind(&self) -> ActionKind {
        if self.mute {
            ActionKind::Mute
        } else {
            ActionKind::Unmute
        }
    }

    fn is_allowed_for_room_renderer(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        let renderer = resolve_renderer(ctx, self).await?;
        Ok(renderer.set_mute(self.mute).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::parse_request_url;
    use raumkernel::{Kernel, MemoryKernel, ZoneSpec};
    use tracing::Span;

    #[tokio::test]
    async fn test_mute_then_unmute_room() {
        let kernel = MemoryKernel::new(vec![ZoneSpec::new("Upstairs", ["Bedroom"])]);
        kernel.init().await.unwrap();
        let ctx = ActionContext::new(
            parse_request_url("/raumserver/controller/mute?id=Bedroom&scope=room").unwrap(),
            kernel.manager_disposer(),
            kernel.version(),
            Span::none(),
        );
        let room = kernel.memory_disposer().memory_room("Bedroom").unwrap();

        assert_eq!(MuteAction::mute().run(&ctx).await.unwrap()["mute"], true);
        assert!(room.snapshot().mute);

        assert_eq!(MuteAction::unmute().run(&ctx).await.unwrap()["mute"], false);
        assert!(!room.snapshot().mute);
    }
}
