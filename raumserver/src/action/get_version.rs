use async_trait::async_trait;
use serde_json::{json, Value};

use super::{Action, ActionContext, ActionError, ActionKind};

/// Versions of the server and of the kernel it runs against.
pub struct GetVersionAction;

#[async_trait]
impl Action for GetVersionAction {
    fn kind(&self) -> ActionKind {
        ActionKind::GetVersion
    }

    async fn run(&self, ctx: &ActionContext) -> Result<Value, ActionError> {
        Ok(json!({
            "raumserver": crate::VERSION,
            "raumkernel": ctx.kernel_version(),
        }))
    }
}
