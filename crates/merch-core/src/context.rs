//! Page context with typed parameter resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Region;

/// URL and ambient page state available to a widget.
///
/// Every parameter is optional: explicit query parameters take precedence,
/// falling back to the ambient page state the hosting shell provides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContext {
    /// Query parameters from the widget's own URL.
    #[serde(default)]
    pub query: HashMap<String, String>,
    /// Search parameters carried by the hosting page state.
    #[serde(default)]
    pub page_params: HashMap<String, String>,
    /// Ambient country from the hosting page state.
    #[serde(default)]
    pub country: Option<String>,
    /// Ambient locale from the hosting page state.
    #[serde(default)]
    pub locale: Option<String>,
    /// Currency code of the active cart, when known.
    #[serde(default)]
    pub cart_currency: Option<String>,
    /// Base API URL override from the hosting page state.
    #[serde(default)]
    pub base_api_url: Option<String>,
}

impl PageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit query parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Set an ambient page-state parameter.
    pub fn with_page_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.page_params.insert(name.into(), value.into());
        self
    }

    /// Resolve a parameter: explicit query first, then ambient page state.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .get(name)
            .or_else(|| self.page_params.get(name))
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// Numeric product id from `productId`.
    pub fn product_id(&self) -> Option<&str> {
        self.param("productId")
    }

    /// Product handle from `productHandle`.
    pub fn product_handle(&self) -> Option<&str> {
        self.param("productHandle")
    }

    /// Numeric variant id from `variantId`.
    pub fn variant_id(&self) -> Option<&str> {
        self.param("variantId")
    }

    /// Selling plan id from `sellingPlanId`.
    pub fn selling_plan_id(&self) -> Option<&str> {
        self.param("sellingPlanId")
    }

    /// Language from `lang`, falling back to the ambient locale.
    pub fn lang(&self) -> Option<&str> {
        self.param("lang")
            .or_else(|| self.locale.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Alternate-variant override id from `altVariant`.
    pub fn alt_variant_id(&self) -> Option<&str> {
        self.param("altVariant")
    }

    /// Alternate-variant availability override from `altAvail`.
    pub fn alt_available(&self) -> Option<&str> {
        self.param("altAvail")
    }

    /// Alternate-variant sold-out override from `altSold`.
    pub fn alt_sold_out(&self) -> Option<&str> {
        self.param("altSold")
    }

    /// Resolve the country code for storefront queries.
    ///
    /// Resolution chain: explicit `country` parameter, then the first two
    /// letters of the cart currency, then the ambient page country, then the
    /// given region's default. Always uppercased.
    pub fn country_code(&self, default: Region) -> String {
        self.param("country")
            .map(str::to_string)
            .or_else(|| {
                self.cart_currency
                    .as_deref()
                    .filter(|c| c.len() >= 2)
                    .map(|c| c[..2].to_string())
            })
            .or_else(|| self.country.clone().filter(|c| !c.is_empty()))
            .unwrap_or_else(|| default.as_str().to_string())
            .to_uppercase()
    }
}
