//! Locator frame descriptors and iframe URL construction.

use base64::prelude::*;
use serde::Serialize;

/// A known locator iframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFrame {
    /// DOM id the host addresses the frame by.
    pub id: &'static str,
    /// Path under the locator root URL serving this frame.
    pub pathname: &'static str,
}

/// The inline find-in-store widget on the product page.
pub const FIND_IN_STORE_PAGE_FRAME: WidgetFrame = WidgetFrame {
    id: "brauz-find-in-store-product-page",
    pathname: "find-in-store",
};

/// The find-in-store drawer widget.
pub const FIND_IN_STORE_DRAWER_FRAME: WidgetFrame = WidgetFrame {
    id: "brauz-find-in-store-drawer-widget-iframe",
    pathname: "find-in-store-drawer",
};

/// The documented locator frame set.
pub const LOCATOR_FRAMES: [WidgetFrame; 2] = [FIND_IN_STORE_PAGE_FRAME, FIND_IN_STORE_DRAWER_FRAME];

/// Deployment configuration for the locator service.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// The iframe content root; also the only trusted message origin.
    pub root_url: String,
    /// Retailer group number at the locator service.
    pub group_number: String,
    /// The shop's platform domain.
    pub domain: String,
    /// The host page origin, embedded in the iframe config.
    pub origin: String,
}

impl LocatorConfig {
    /// The known deployment, parameterized by the host page origin.
    pub fn for_deployment(origin: impl Into<String>) -> Self {
        Self {
            root_url: "https://brauz-lskd-fis-fe.netlify.app".to_string(),
            group_number: "LSKD".to_string(),
            domain: "loosekid.myshopify.com".to_string(),
            origin: origin.into(),
        }
    }

    /// Build a frame's full URL with its base64-encoded config payload.
    pub fn frame_url(&self, frame: &WidgetFrame) -> String {
        let config = IframeConfig {
            group_number: &self.group_number,
            origin: &self.origin,
            domain: &self.domain,
            iframe_id: frame.id,
            is_tapcart: true,
        };
        let encoded =
            BASE64_STANDARD.encode(serde_json::to_string(&config).unwrap_or_default());
        format!(
            "{}/{}/?iframe_config={}",
            self.root_url.trim_end_matches('/'),
            frame.pathname,
            encoded
        )
    }
}

/// Config payload embedded in each frame URL.
///
/// `is_tapcart` identifies the iframe as rendered inside the mobile shell.
#[derive(Serialize)]
struct IframeConfig<'a> {
    group_number: &'a str,
    origin: &'a str,
    domain: &'a str,
    iframe_id: &'a str,
    is_tapcart: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_frame_url_embeds_config() {
        let config = LocatorConfig::for_deployment("https://host.example.com");
        let url = config.frame_url(&FIND_IN_STORE_PAGE_FRAME);

        let (base, query) = url.split_once("/?iframe_config=").unwrap();
        assert_eq!(
            base,
            "https://brauz-lskd-fis-fe.netlify.app/find-in-store"
        );

        let decoded = BASE64_STANDARD.decode(query).unwrap();
        let payload: Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(payload["group_number"], "LSKD");
        assert_eq!(payload["origin"], "https://host.example.com");
        assert_eq!(payload["domain"], "loosekid.myshopify.com");
        assert_eq!(payload["iframe_id"], "brauz-find-in-store-product-page");
        assert_eq!(payload["is_tapcart"], true);
    }

    #[test]
    fn test_drawer_frame_pathname() {
        let config = LocatorConfig::for_deployment("https://host.example.com");
        let url = config.frame_url(&FIND_IN_STORE_DRAWER_FRAME);
        assert!(url.starts_with("https://brauz-lskd-fis-fe.netlify.app/find-in-store-drawer/?"));
    }
}
