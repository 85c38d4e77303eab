//! Iframe registry and broadcast fan-out.

use tracing::error;

use crate::{BridgeError, Message};

/// Outbound transport handle for one iframe.
///
/// In a browser host this wraps `contentWindow.postMessage`; tests use
/// recording fakes.
pub trait IframeTransport {
    /// Post a message to the iframe.
    fn post(&self, message: &Message) -> Result<(), BridgeError>;
}

struct RegisteredFrame {
    id: String,
    transport: Option<Box<dyn IframeTransport>>,
}

/// Registry of known widget iframes keyed by id.
///
/// A frame can be known before it is mounted; broadcasts skip frames with
/// no attached transport. A failing transport is logged and skipped, it
/// never aborts delivery to the remaining frames.
#[derive(Default)]
pub struct IframeRegistry {
    frames: Vec<RegisteredFrame>,
}

impl IframeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a frame id known without attaching a transport yet.
    pub fn register(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.frames.iter().any(|f| f.id == id) {
            self.frames.push(RegisteredFrame {
                id,
                transport: None,
            });
        }
    }

    /// Attach (or replace) the transport for a frame, registering it if
    /// needed.
    pub fn mount(&mut self, id: impl Into<String>, transport: Box<dyn IframeTransport>) {
        let id = id.into();
        if let Some(frame) = self.frames.iter_mut().find(|f| f.id == id) {
            frame.transport = Some(transport);
        } else {
            self.frames.push(RegisteredFrame {
                id,
                transport: Some(transport),
            });
        }
    }

    /// Detach a frame's transport, keeping the id registered.
    pub fn unmount(&mut self, id: &str) {
        if let Some(frame) = self.frames.iter_mut().find(|f| f.id == id) {
            frame.transport = None;
        }
    }

    /// Registered frame ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.frames.iter().map(|f| f.id.as_str())
    }

    /// Send a message to every mounted frame.
    ///
    /// Returns the number of successful deliveries. Unmounted frames are
    /// skipped silently; post failures are logged and skipped.
    pub fn broadcast(&self, message: &Message) -> usize {
        let mut delivered = 0;
        for frame in &self.frames {
            let Some(transport) = frame.transport.as_ref() else {
                continue;
            };
            match transport.post(message) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    error!(iframe_id = %frame.id, code = message.code(), "post to iframe failed: {e}");
                }
            }
        }
        delivered
    }
}
