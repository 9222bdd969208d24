//! Traits describing the control surface raumserver talks to.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// A playback endpoint: either the virtual renderer of a zone or the
/// renderer of a single room.
///
/// Every control call resolves with whatever the renderer reports back,
/// already converted to JSON.
#[async_trait]
pub trait MediaRenderer: Send + Sync {
    /// Unique device name of the renderer
    fn udn(&self) -> &str;

    /// Friendly name of the renderer
    fn name(&self) -> &str;

    /// Skip to the next track
    async fn next(&self) -> Result<Value>;

    /// Go back to the previous track
    async fn prev(&self) -> Result<Value>;

    async fn play(&self) -> Result<Value>;

    async fn pause(&self) -> Result<Value>;

    async fn stop(&self) -> Result<Value>;

    /// Set the absolute volume (0-100)
    async fn set_volume(&self, volume: u8) -> Result<Value>;

    async fn set_mute(&self, mute: bool) -> Result<Value>;

    /// Snapshot of the renderer's current state
    async fn state(&self) -> Result<Value>;
}

/// Handle used by every action to find the renderer it should control.
///
/// The identifier is matched against room names and renderer UDNs.
#[async_trait]
pub trait ManagerDisposer: Send + Sync {
    /// Virtual renderer of the zone the identified room belongs to.
    async fn virtual_renderer_for_room(&self, id: &str) -> Result<Option<Arc<dyn MediaRenderer>>>;

    /// Renderer of the identified room itself.
    async fn room_renderer(&self, id: &str) -> Result<Option<Arc<dyn MediaRenderer>>>;
}

/// Entry point of a multiroom control backend.
#[async_trait]
pub trait Kernel: Send + Sync {
    /// Bring the backend up. Lookups fail with
    /// [`crate::KernelError::NotInitialized`] until this has completed.
    async fn init(&self) -> Result<()>;

    /// Shared handle injected into every action.
    fn manager_disposer(&self) -> Arc<dyn ManagerDisposer>;

    /// Version string of the backend
    fn version(&self) -> &str;
}
