//! Injected action hooks.
//!
//! The locator iframes can ask the host page to select a variant option or
//! trigger its add-to-cart button. Instead of ambient globals, the host
//! wires these as an injected service owned by the composition root.

use crate::BridgeError;

/// Host-page actions the bridge can invoke on behalf of an iframe.
pub trait ActionHooks {
    /// Select an option value on the host page's variant selector.
    fn select_variant_option(&self, name: &str, value: &str) -> Result<(), BridgeError>;

    /// Trigger the host page's add-to-cart action.
    fn trigger_add_to_cart(&self) -> Result<(), BridgeError>;
}
