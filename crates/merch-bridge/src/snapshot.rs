//! The host-owned shared data snapshot.

use merch_catalog::LocatorProduct;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregate of product, variant, location and selected-store data.
///
/// Owned by the host and broadcast wholesale to every registered iframe
/// whenever any field changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedSnapshot {
    /// The shopper's location payload (opaque to the host).
    #[serde(default)]
    pub location_data: Map<String, Value>,
    /// The shopper's selected store id; empty when none chosen yet.
    #[serde(default)]
    pub selected_store_id: String,
    /// The current product in locator wire form; absent until fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<LocatorProduct>,
    /// The current variant id; empty when unresolved.
    #[serde(default)]
    pub variant_id: String,
}
