//! Multiroom control seam for raumserver.
//!
//! raumserver never talks to devices itself. Everything it needs from the
//! multiroom system is expressed by three traits:
//!
//! - [`Kernel`]: backend entry point, initialised once at startup.
//! - [`ManagerDisposer`]: shared handle that resolves rooms and zones to
//!   renderers. One instance is injected into every action.
//! - [`MediaRenderer`]: a playback endpoint with transport and rendering
//!   control calls, each resolving to a JSON value.
//!
//! [`MemoryKernel`] implements all three in-process so the server can run and
//! be tested without hardware.

mod error;
mod memory;
mod renderer;

pub use error::{KernelError, Result};
pub use memory::{MemoryDisposer, MemoryKernel, MemoryRenderer, RendererState, TransportState, ZoneSpec};
pub use renderer::{Kernel, ManagerDisposer, MediaRenderer};
