//! In-process multiroom simulator.
//!
//! `MemoryKernel` models a fixed set of zones, each with one virtual
//! renderer and one renderer per room. Control calls mutate the renderer's
//! state and resolve with a snapshot of it. It backs the raumserver binary
//! when no hardware backend is wired in, and is what the tests run against.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::{Kernel, KernelError, ManagerDisposer, MediaRenderer, Result};

const MAX_VOLUME: u8 = 100;
const DEFAULT_VOLUME: u8 = 20;

/// Zone layout used to build a [`MemoryKernel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSpec {
    /// Zone name, also used for the virtual renderer's name
    pub name: String,
    /// Names of the rooms in the zone
    pub rooms: Vec<String>,
}

impl ZoneSpec {
    pub fn new(name: impl Into<String>, rooms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            rooms: rooms.into_iter().map(Into::into).collect(),
        }
    }
}

/// Transport state of a simulated renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportState {
    Stopped,
    Playing,
    Paused,
}

/// Snapshot of a simulated renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererState {
    pub udn: String,
    pub name: String,
    pub transport_state: TransportState,
    /// 1-based index of the current track
    pub track: u32,
    pub volume: u8,
    pub mute: bool,
}

/// A renderer whose state lives in memory.
pub struct MemoryRenderer {
    udn: String,
    name: String,
    state: RwLock<RendererState>,
    initialized: Arc<AtomicBool>,
}

impl MemoryRenderer {
    fn new(udn: String, name: String, initialized: Arc<AtomicBool>) -> Self {
        let state = RendererState {
            udn: udn.clone(),
            name: name.clone(),
            transport_state: TransportState::Stopped,
            track: 1,
            volume: DEFAULT_VOLUME,
            mute: false,
        };

        Self {
            udn,
            name,
            state: RwLock::new(state),
            initialized,
        }
    }

    /// Current state of the renderer.
    pub fn snapshot(&self) -> RendererState {
        self.state.read().clone()
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(KernelError::NotInitialized)
        }
    }

    fn read(&self) -> Result<Value> {
        self.ensure_initialized()?;
        let state = self.state.read();
        Ok(serde_json::to_value(&*state)?)
    }

    fn update(&self, apply: impl FnOnce(&mut RendererState)) -> Result<Value> {
        self.ensure_initialized()?;
        let mut state = self.state.write();
        apply(&mut state);
        debug!(udn = %self.udn, track = state.track, volume = state.volume, "Renderer state updated");
        Ok(serde_json::to_value(&*state)?)
    }
}

#[async_trait]
impl MediaRenderer for MemoryRenderer {
    fn udn(&self) -> &str {
        &self.udn
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn next(&self) -> Result<Value> {
        self.update(|state| state.track = state.track.saturating_add(1))
    }

    async fn prev(&self) -> Result<Value> {
        self.update(|state| state.track = state.track.saturating_sub(1).max(1))
    }

    async fn play(&self) -> Result<Value> {
        self.update(|state| state.transport_state = TransportState::Playing)
    }

    async fn pause(&self) -> Result<Value> {
        self.update(|state| {
            // Pausing a stopped renderer leaves it stopped
            if state.transport_state == TransportState::Playing {
                state.transport_state = TransportState::Paused;
            }
        })
    }

    async fn stop(&self) -> Result<Value> {
        self.update(|state| state.transport_state = TransportState::Stopped)
    }

    async fn set_volume(&self, volume: u8) -> Result<Value> {
        if volume > MAX_VOLUME {
            return Err(KernelError::Rejected(json!({
                "reason": "volume out of range",
                "volume": volume,
            })));
        }
        self.update(|state| state.volume = volume)
    }

    async fn set_mute(&self, mute: bool) -> Result<Value> {
        self.update(|state| state.mute = mute)
    }

    async fn state(&self) -> Result<Value> {
        self.read()
    }
}

struct Zone {
    renderer: Arc<MemoryRenderer>,
    rooms: Vec<Arc<MemoryRenderer>>,
}

impl Zone {
    fn find_room(&self, id: &str) -> Option<&Arc<MemoryRenderer>> {
        self.rooms
            .iter()
            .find(|room| room.name == id || room.udn == id)
    }
}

/// Renderer lookup over the simulated zones.
pub struct MemoryDisposer {
    zones: Vec<Zone>,
    initialized: Arc<AtomicBool>,
}

impl MemoryDisposer {
    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(KernelError::NotInitialized)
        }
    }

    /// Concrete room renderer, for callers that want to inspect its state.
    pub fn memory_room(&self, id: &str) -> Option<Arc<MemoryRenderer>> {
        self.zones.iter().find_map(|zone| zone.find_room(id)).cloned()
    }

    /// Concrete virtual renderer of the zone containing `id`.
    pub fn memory_zone(&self, id: &str) -> Option<Arc<MemoryRenderer>> {
        self.zones
            .iter()
            .find(|zone| zone.renderer.udn == id || zone.find_room(id).is_some())
            .map(|zone| zone.renderer.clone())
    }
}

#[async_trait]
impl ManagerDisposer for MemoryDisposer {
    async fn virtual_renderer_for_room(&self, id: &str) -> Result<Option<Arc<dyn MediaRenderer>>> {
        self.ensure_initialized()?;
        let renderer = self.memory_zone(id);
        debug!(id, found = renderer.is_some(), "Virtual renderer lookup");
        Ok(renderer.map(|r| r as Arc<dyn MediaRenderer>))
    }

    async fn room_renderer(&self, id: &str) -> Result<Option<Arc<dyn MediaRenderer>>> {
        self.ensure_initialized()?;
        let renderer = self.memory_room(id);
        debug!(id, found = renderer.is_some(), "Room renderer lookup");
        Ok(renderer.map(|r| r as Arc<dyn MediaRenderer>))
    }
}

/// Simulated multiroom system.
///
/// # Example
///
/// ```
/// use raumkernel::{Kernel, MemoryKernel, ZoneSpec};
///
/// # #[tokio::main]
/// # async fn main() {
/// let kernel = MemoryKernel::new(vec![ZoneSpec::new("Downstairs", ["Kitchen", "Living"])]);
/// kernel.init().await.unwrap();
///
/// let renderer = kernel
///     .manager_disposer()
///     .virtual_renderer_for_room("Kitchen")
///     .await
///     .unwrap()
///     .unwrap();
/// let state = renderer.next().await.unwrap();
/// assert_eq!(state["track"], 2);
/// # }
/// ```
pub struct MemoryKernel {
    disposer: Arc<MemoryDisposer>,
}

impl MemoryKernel {
    pub fn new(zones: Vec<ZoneSpec>) -> Self {
        let initialized = Arc::new(AtomicBool::new(false));

        let zones = zones
            .into_iter()
            .map(|spec| {
                let renderer = Arc::new(MemoryRenderer::new(
                    format!("uuid:zone-{}", slug(&spec.name)),
                    spec.name.clone(),
                    initialized.clone(),
                ));
                let rooms = spec
                    .rooms
                    .iter()
                    .map(|room| {
                        Arc::new(MemoryRenderer::new(
                            format!("uuid:room-{}", slug(room)),
                            room.clone(),
                            initialized.clone(),
                        ))
                    })
                    .collect();
                Zone { renderer, rooms }
            })
            .collect();

        Self {
            disposer: Arc::new(MemoryDisposer { zones, initialized }),
        }
    }

    /// Concrete disposer, for inspecting simulated renderer state.
    pub fn memory_disposer(&self) -> &Arc<MemoryDisposer> {
        &self.disposer
    }
}

#[async_trait]
impl Kernel for MemoryKernel {
    async fn init(&self) -> Result<()> {
        let rooms: usize = self.disposer.zones.iter().map(|zone| zone.rooms.len()).sum();
        self.disposer.initialized.store(true, Ordering::Release);
        info!(zones = self.disposer.zones.len(), rooms, "Memory kernel initialized");
        Ok(())
    }

    fn manager_disposer(&self) -> Arc<dyn ManagerDisposer> {
        self.disposer.clone()
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }
}

fn slug(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn kernel() -> MemoryKernel {
        let kernel = MemoryKernel::new(vec![
            ZoneSpec::new("Downstairs", ["Kitchen", "Living Room"]),
            ZoneSpec::new("Upstairs", ["Bedroom"]),
        ]);
        kernel.init().await.unwrap();
        kernel
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Living Room"), "living-room");
        assert_eq!(slug(" Kitchen "), "kitchen");
    }

    #[tokio::test]
    async fn test_lookup_before_init_fails() {
        let kernel = MemoryKernel::new(vec![ZoneSpec::new("Downstairs", ["Kitchen"])]);
        let result = kernel.manager_disposer().room_renderer("Kitchen").await;
        assert!(matches!(result, Err(KernelError::NotInitialized)));
    }

    #[tokio::test]
    async fn test_virtual_renderer_lookup_by_room_name_and_udn() {
        let kernel = kernel().await;
        let disposer = kernel.manager_disposer();

        let by_name = disposer.virtual_renderer_for_room("Kitchen").await.unwrap().unwrap();
        assert_eq!(by_name.udn(), "uuid:zone-downstairs");

        let by_udn = disposer
            .virtual_renderer_for_room("uuid:room-bedroom")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_udn.name(), "Upstairs");

        assert!(disposer.virtual_renderer_for_room("Garage").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_room_renderer_lookup() {
        let kernel = kernel().await;
        let disposer = kernel.manager_disposer();

        let room = disposer.room_renderer("Living Room").await.unwrap().unwrap();
        assert_eq!(room.udn(), "uuid:room-living-room");
        // A zone's virtual renderer is not a room
        assert!(disposer.room_renderer("uuid:zone-downstairs").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_track_navigation() {
        let kernel = kernel().await;
        let renderer = kernel.memory_disposer().memory_zone("Kitchen").unwrap();

        assert_eq!(renderer.next().await.unwrap()["track"], 2);
        assert_eq!(renderer.next().await.unwrap()["track"], 3);
        assert_eq!(renderer.prev().await.unwrap()["track"], 2);
        renderer.prev().await.unwrap();
        // Cannot go before the first track
        assert_eq!(renderer.prev().await.unwrap()["track"], 1);
    }

    #[tokio::test]
    async fn test_transport_transitions() {
        let kernel = kernel().await;
        let renderer = kernel.memory_disposer().memory_zone("Bedroom").unwrap();

        renderer.pause().await.unwrap();
        assert_eq!(renderer.snapshot().transport_state, TransportState::Stopped);

        let state = renderer.play().await.unwrap();
        assert_eq!(state["transportState"], "PLAYING");

        renderer.pause().await.unwrap();
        assert_eq!(renderer.snapshot().transport_state, TransportState::Paused);

        renderer.stop().await.unwrap();
        assert_eq!(renderer.snapshot().transport_state, TransportState::Stopped);
    }

    #[tokio::test]
    async fn test_volume_and_mute() {
        let kernel = kernel().await;
        let room = kernel.memory_disposer().memory_room("Kitchen").unwrap();

        assert_eq!(room.set_volume(35).await.unwrap()["volume"], 35);
        assert_eq!(room.set_mute(true).await.unwrap()["mute"], true);

        let rejected = room.set_volume(101).await;
        assert!(matches!(rejected, Err(KernelError::Rejected(_))));
        assert_eq!(room.snapshot().volume, 35);
    }

    #[tokio::test]
    async fn test_state_snapshot_fields() {
        let kernel = kernel().await;
        let room = kernel.memory_disposer().memory_room("Bedroom").unwrap();

        let state = room.state().await.unwrap();
        assert_eq!(state["udn"], "uuid:room-bedroom");
        assert_eq!(state["name"], "Bedroom");
        assert_eq!(state["transportState"], "STOPPED");
        assert_eq!(state["track"], 1);
        assert_eq!(state["volume"], DEFAULT_VOLUME);
        assert_eq!(state["mute"], false);
    }

    #[tokio::test]
    async fn test_state_read_matches_snapshot() {
        let kernel = kernel().await;
        let zone = kernel.memory_disposer().memory_zone("Kitchen").unwrap();
        zone.next().await.unwrap();
        let before = zone.snapshot();

        let state = zone.state().await.unwrap();
        assert_eq!(state, serde_json::to_value(&before).unwrap());
        assert_eq!(zone.snapshot(), before);
    }

    #[tokio::test]
    async fn test_state_before_init_fails() {
        let kernel = MemoryKernel::new(vec![ZoneSpec::new("Downstairs", ["Kitchen"])]);
        let room = kernel.memory_disposer().memory_room("Kitchen").unwrap();
        assert!(matches!(room.state().await, Err(KernelError::NotInitialized)));
    }
}
