//! Per-region storefront configuration.

use serde::{Deserialize, Serialize};

/// Supported storefront regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Region {
    /// Australia / New Zealand storefront.
    #[default]
    Au,
    /// United States storefront.
    Us,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Au => "AU",
            Region::Us => "US",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "AU" => Some(Region::Au),
            "US" => Some(Region::Us),
            _ => None,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static configuration for one regional storefront.
///
/// Profiles are plain data; hosts can construct their own instead of using
/// the built-in ones.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionProfile {
    /// Region this profile serves.
    pub region: Region,
    /// Shop subdomain on the storefront platform (e.g. "loosekid").
    pub store_name: String,
    /// Public storefront API access token.
    pub access_token: String,
    /// Storefront API version segment (e.g. "2025-10").
    pub api_version: String,
    /// Theme asset id used to build CDN swatch image URLs.
    pub asset_id: u32,
    /// CDN base for theme assets.
    pub cdn_base: String,
}

impl RegionProfile {
    /// Built-in profile for a region.
    pub fn for_region(region: Region) -> Self {
        match region {
            Region::Au => Self {
                region,
                store_name: "loosekid".to_string(),
                access_token: "adf030af27addd2acf6906f4b810d150".to_string(),
                api_version: "2025-10".to_string(),
                asset_id: 683,
                cdn_base: "https://lskd.co/cdn/shop".to_string(),
            },
            Region::Us => Self {
                region,
                store_name: "loosekid-us".to_string(),
                access_token: "2d6c85b567bb77eb954d948efe18c605".to_string(),
                api_version: "2025-10".to_string(),
                asset_id: 76,
                cdn_base: "https://lskd.co/cdn/shop".to_string(),
            },
        }
    }

    /// GraphQL endpoint for this storefront.
    pub fn graphql_endpoint(&self) -> String {
        format!(
            "https://{}.myshopify.com/api/{}/graphql.json",
            self.store_name, self.api_version
        )
    }

    /// CDN URL for a theme asset file (swatch images).
    pub fn asset_url(&self, file: &str) -> String {
        format!("{}/t/{}/assets/{}", self.cdn_base, self.asset_id, file)
    }
}
