//! Cross-frame message bus for the embedded widget iframes.
//!
//! This crate provides:
//! - `Message` - The typed message protocol over `MESSAGE_*` wire codes
//! - `SharedSnapshot` - The host-owned shared data broadcast to iframes
//! - `IframeRegistry` / `IframeTransport` - Fan-out with partial-failure
//!   semantics
//! - `HeightCoordinator` - Per-iframe height and drawer visibility state
//! - `HostBridge` - The single logical owner dispatching inbound messages
//! - `ActionHooks` - Injected callbacks replacing ambient global hooks
//!
//! Iframes are read-only observers: they request updates and report events,
//! but only the host mutates the shared snapshot and height record.

mod error;
mod height;
mod hooks;
mod host;
mod message;
mod registry;
mod snapshot;

pub use error::*;
pub use height::*;
pub use hooks::*;
pub use host::*;
pub use message::*;
pub use registry::*;
pub use snapshot::*;
