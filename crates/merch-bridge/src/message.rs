//! The typed message protocol.
//!
//! Messages travel as JSON envelopes `{ code, ...payload }` where `code` is
//! one of the fixed `MESSAGE_*` strings the deployed iframe content already
//! speaks. Payload fields are defaulted when absent; unknown codes fail to
//! decode and are dropped by the receiver.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::snapshot::SharedSnapshot;

/// A message on the cross-frame channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum Message {
    /// iframe → host: asks for the current shared snapshot.
    #[serde(rename = "MESSAGE_REQUEST_IFRAME_DATA")]
    RequestIframeData,

    /// host → iframe: the authoritative shared snapshot.
    #[serde(rename = "MESSAGE_GET_IFRAME_DATA")]
    GetIframeData { iframe_data: SharedSnapshot },

    /// iframe → host: reports the iframe's rendered content height.
    #[serde(rename = "MESSAGE_ADJUST_WIDGET_HEIGHT")]
    AdjustWidgetHeight {
        #[serde(default)]
        iframe_id: String,
        #[serde(default)]
        height: u32,
    },

    /// iframe → host: opens the locator drawer.
    #[serde(rename = "MESSAGE_OPEN_DRAWER")]
    OpenDrawer,

    /// iframe → host: closes the locator drawer.
    #[serde(rename = "MESSAGE_CLOSE_DRAWER")]
    CloseDrawer,

    /// iframe → host: persists and folds in a location payload.
    #[serde(rename = "MESSAGE_UPDATE_LOCATION_DATA")]
    UpdateLocationData {
        #[serde(default)]
        location_data: Map<String, Value>,
    },

    /// iframe → host: persists and folds in the selected store id.
    #[serde(rename = "MESSAGE_UPDATE_SELECTED_STORE_ID")]
    UpdateSelectedStoreId {
        #[serde(default)]
        selected_store_id: String,
    },

    /// iframe → host: requests an option selection on the host page.
    #[serde(rename = "MESSAGE_SELECT_VARIANT")]
    SelectVariant {
        #[serde(default)]
        variant: VariantPick,
    },

    /// iframe → host: requests the host page's add-to-cart action.
    #[serde(rename = "MESSAGE_TRIGGER_ADD_TO_CART_BUTTON")]
    TriggerAddToCartButton,
}

impl Message {
    /// Decode an envelope; `None` for unknown codes or malformed payloads.
    pub fn decode(envelope: Value) -> Option<Self> {
        serde_json::from_value(envelope).ok()
    }

    /// The wire code string for this message.
    pub fn code(&self) -> &'static str {
        match self {
            Message::RequestIframeData => "MESSAGE_REQUEST_IFRAME_DATA",
            Message::GetIframeData { .. } => "MESSAGE_GET_IFRAME_DATA",
            Message::AdjustWidgetHeight { .. } => "MESSAGE_ADJUST_WIDGET_HEIGHT",
            Message::OpenDrawer => "MESSAGE_OPEN_DRAWER",
            Message::CloseDrawer => "MESSAGE_CLOSE_DRAWER",
            Message::UpdateLocationData { .. } => "MESSAGE_UPDATE_LOCATION_DATA",
            Message::UpdateSelectedStoreId { .. } => "MESSAGE_UPDATE_SELECTED_STORE_ID",
            Message::SelectVariant { .. } => "MESSAGE_SELECT_VARIANT",
            Message::TriggerAddToCartButton => "MESSAGE_TRIGGER_ADD_TO_CART_BUTTON",
        }
    }
}

/// Option pick carried by `SELECT_VARIANT`.
///
/// The deployed locator sends misspelled `optiona_*` field names; both
/// spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantPick {
    #[serde(default, alias = "optiona_name")]
    pub option_name: Option<String>,
    #[serde(default, alias = "optiona_value")]
    pub option_value: Option<String>,
}
