//! The host side of the cross-frame bridge.

use merch_catalog::LocatorProduct;
use merch_store::{KeyValueStore, StateAdapter, StorageKey};
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    ActionHooks, BridgeError, HeightCoordinator, IframeRegistry, Message, SharedSnapshot,
};

/// Single logical owner of the shared snapshot and height record.
///
/// All inbound messages funnel through [`HostBridge::receive`], which
/// validates the sender origin, dispatches per message code, and
/// rebroadcasts the snapshot whenever it changes.
pub struct HostBridge<S> {
    trusted_origin: String,
    registry: IframeRegistry,
    heights: HeightCoordinator,
    snapshot: SharedSnapshot,
    state: StateAdapter<S>,
    hooks: Option<Box<dyn ActionHooks>>,
}

impl<S: KeyValueStore> HostBridge<S> {
    /// Create a host bridge trusting exactly one sender origin.
    pub fn new(
        trusted_origin: impl Into<String>,
        drawer_frame_id: impl Into<String>,
        state: StateAdapter<S>,
    ) -> Self {
        Self {
            trusted_origin: trusted_origin.into(),
            registry: IframeRegistry::new(),
            heights: HeightCoordinator::new(drawer_frame_id),
            snapshot: SharedSnapshot::default(),
            state,
            hooks: None,
        }
    }

    /// Inject the host-page action hooks.
    pub fn with_hooks(mut self, hooks: Box<dyn ActionHooks>) -> Self {
        self.set_hooks(hooks);
        self
    }

    /// Replace the host-page action hooks.
    pub fn set_hooks(&mut self, hooks: Box<dyn ActionHooks>) {
        self.hooks = Some(hooks);
    }

    pub fn registry_mut(&mut self) -> &mut IframeRegistry {
        &mut self.registry
    }

    pub fn heights(&self) -> &HeightCoordinator {
        &self.heights
    }

    pub fn snapshot(&self) -> &SharedSnapshot {
        &self.snapshot
    }

    /// Seed the snapshot from persisted state and broadcast it.
    pub fn load_persisted(&mut self) {
        self.snapshot.location_data = self.state.read(StorageKey::Location);

        let store_data = self.state.read(StorageKey::SelectedStoreId);
        self.snapshot.selected_store_id = store_data
            .get("selected_store_id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        self.broadcast_snapshot();
    }

    /// Replace the snapshot's product and broadcast.
    pub fn set_product(&mut self, product: Option<LocatorProduct>) {
        self.snapshot.product = product;
        self.broadcast_snapshot();
    }

    /// Replace the snapshot's variant id and broadcast.
    pub fn set_variant_id(&mut self, variant_id: impl Into<String>) {
        self.snapshot.variant_id = variant_id.into();
        self.broadcast_snapshot();
    }

    /// Broadcast the current snapshot to every registered iframe.
    pub fn broadcast_snapshot(&self) -> usize {
        self.registry.broadcast(&Message::GetIframeData {
            iframe_data: self.snapshot.clone(),
        })
    }

    /// Handle one inbound message envelope.
    ///
    /// Messages from any origin other than the trusted iframe root are
    /// dropped silently; malformed envelopes are dropped with a debug log.
    /// Only action-hook failures surface to the caller.
    pub fn receive(&mut self, origin: &str, envelope: Value) -> Result<(), BridgeError> {
        if origin != self.trusted_origin {
            return Ok(());
        }

        let Some(message) = Message::decode(envelope) else {
            debug!("dropping unrecognized message envelope");
            return Ok(());
        };

        match message {
            Message::RequestIframeData => {
                self.broadcast_snapshot();
            }
            Message::AdjustWidgetHeight { iframe_id, height } => {
                self.heights.record(iframe_id, height);
            }
            Message::OpenDrawer => {
                self.heights.open_drawer();
            }
            Message::CloseDrawer => {
                self.heights.close_drawer();
            }
            Message::UpdateLocationData { location_data } => {
                self.state.merge(StorageKey::Location, &location_data);
                self.snapshot.location_data = location_data;
                self.broadcast_snapshot();
            }
            Message::UpdateSelectedStoreId { selected_store_id } => {
                if selected_store_id.is_empty() {
                    return Ok(());
                }
                let mut partial = serde_json::Map::new();
                partial.insert(
                    "selected_store_id".to_string(),
                    Value::String(selected_store_id.clone()),
                );
                self.state.merge(StorageKey::SelectedStoreId, &partial);
                self.snapshot.selected_store_id = selected_store_id;
                self.broadcast_snapshot();
            }
            Message::SelectVariant { variant } => {
                let (Some(name), Some(value)) =
                    (variant.option_name.as_deref(), variant.option_value.as_deref())
                else {
                    return Ok(());
                };
                if name.is_empty() || value.is_empty() {
                    return Ok(());
                }
                if let Some(hooks) = self.hooks.as_ref() {
                    if let Err(e) = hooks.select_variant_option(name, value) {
                        error!("variant selection hook failed: {e}");
                        return Err(e);
                    }
                }
            }
            Message::TriggerAddToCartButton => {
                if let Some(hooks) = self.hooks.as_ref() {
                    if let Err(e) = hooks.trigger_add_to_cart() {
                        error!("add-to-cart hook failed: {e}");
                        return Err(e);
                    }
                }
            }
            // Host-bound snapshots arriving inbound are an echo; ignore.
            Message::GetIframeData { .. } => {
                debug!("ignoring snapshot echo");
            }
        }

        Ok(())
    }
}
