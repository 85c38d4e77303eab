//! The find-in-store locator host widget.

use anyhow::Context;
use merch_bridge::{ActionHooks, BridgeError, HostBridge, IframeTransport};
use merch_catalog::{ProductId, VariantId};
use merch_core::PageContext;
use merch_store::{KeyValueStore, StateAdapter};
use merch_storefront::{ProductDetail, StorefrontClient};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::{
    LocatorConfig, RequestGate, RequestTicket, WidgetFrame, FIND_IN_STORE_DRAWER_FRAME,
    LOCATOR_FRAMES,
};

/// Host side of the find-in-store widget pair.
///
/// Owns the cross-frame bridge, fetches the current product for the shared
/// snapshot, and exposes frame URLs plus loading state for rendering.
pub struct FindInStoreWidget<S> {
    config: LocatorConfig,
    client: StorefrontClient,
    bridge: HostBridge<S>,
    gate: RequestGate,
}

impl<S: KeyValueStore> FindInStoreWidget<S> {
    /// Wire up the widget against a locator deployment.
    ///
    /// The trusted message origin is derived from the configured root URL.
    pub fn new(config: LocatorConfig, client: StorefrontClient, store: S) -> anyhow::Result<Self> {
        let root = Url::parse(&config.root_url)
            .with_context(|| format!("invalid locator root URL: {}", config.root_url))?;
        let trusted_origin = root.origin().ascii_serialization();

        let mut bridge = HostBridge::new(
            trusted_origin,
            FIND_IN_STORE_DRAWER_FRAME.id,
            StateAdapter::new(store),
        );
        for frame in LOCATOR_FRAMES {
            bridge.registry_mut().register(frame.id);
        }

        Ok(Self {
            config,
            client,
            bridge,
            gate: RequestGate::new(),
        })
    }

    /// Inject the host-page action hooks.
    pub fn with_hooks(mut self, hooks: Box<dyn ActionHooks>) -> Self {
        self.bridge.set_hooks(hooks);
        self
    }

    /// Attach the transport for a mounted frame.
    pub fn mount_frame(&mut self, frame: &WidgetFrame, transport: Box<dyn IframeTransport>) {
        self.bridge.registry_mut().mount(frame.id, transport);
    }

    /// Detach a frame's transport.
    pub fn unmount_frame(&mut self, frame: &WidgetFrame) {
        self.bridge.registry_mut().unmount(frame.id);
    }

    /// Seed the snapshot from persisted state and the page context, then
    /// broadcast.
    pub fn init(&mut self, context: &PageContext) {
        self.bridge.load_persisted();

        let variant_id = context
            .variant_id()
            .and_then(VariantId::from_gid)
            .map(VariantId::into_inner)
            .unwrap_or_default();
        self.bridge.set_variant_id(variant_id);
    }

    /// Fetch the current product and fold it into the snapshot.
    ///
    /// Missing product context renders an empty widget rather than erroring;
    /// fetch failures degrade to an empty product snapshot. Superseded
    /// completions are discarded.
    pub async fn hydrate_product(&mut self, context: &PageContext) {
        let Some(product_id) = context.product_id().and_then(ProductId::from_gid) else {
            return;
        };

        let ticket = self.begin_product_fetch();
        let result = self.client.product_detail(&product_id).await;
        self.complete_product_fetch(ticket, result.unwrap_or_else(|e| {
            warn!(product_id = %product_id, "product fetch failed: {e}");
            None
        }));
    }

    /// Issue a ticket for an in-flight product fetch.
    pub fn begin_product_fetch(&mut self) -> RequestTicket {
        self.gate.issue()
    }

    /// Apply a product fetch completion; returns false when superseded.
    pub fn complete_product_fetch(
        &mut self,
        ticket: RequestTicket,
        detail: Option<ProductDetail>,
    ) -> bool {
        if !self.gate.is_current(ticket) {
            debug!("discarding superseded product fetch");
            return false;
        }
        self.bridge.set_product(detail.and_then(|d| d.to_locator()));
        true
    }

    /// Handle one inbound message envelope from an iframe.
    pub fn receive_message(&mut self, origin: &str, envelope: Value) -> Result<(), BridgeError> {
        self.bridge.receive(origin, envelope)
    }

    /// Full URL for a locator frame.
    pub fn frame_url(&self, frame: &WidgetFrame) -> String {
        self.config.frame_url(frame)
    }

    /// Whether a frame should show its loading placeholder.
    pub fn is_loading(&self, frame: &WidgetFrame) -> bool {
        self.bridge.heights().is_loading(frame.id)
    }

    /// Reported height for a frame's container.
    pub fn frame_height(&self, frame: &WidgetFrame) -> u32 {
        self.bridge.heights().height(frame.id)
    }

    /// Whether the drawer is open.
    pub fn is_drawer_open(&self) -> bool {
        self.bridge.heights().is_drawer_open()
    }

    /// Whether any frame has reported a height yet.
    pub fn any_frame_measured(&self) -> bool {
        self.bridge.heights().any_reported()
    }

    /// The current shared snapshot.
    pub fn snapshot(&self) -> &merch_bridge::SharedSnapshot {
        self.bridge.snapshot()
    }
}
