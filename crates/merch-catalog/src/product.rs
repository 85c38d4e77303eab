//! Product and variant types.

use serde::{Deserialize, Serialize};

use crate::ids::{ProductId, VariantId};

/// Minimum variant price of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Decimal amount in the currency's major unit.
    pub amount: f64,
    /// ISO currency code (e.g. "AUD").
    pub currency_code: String,
}

impl Price {
    pub fn new(amount: f64, currency_code: impl Into<String>) -> Self {
        Self {
            amount,
            currency_code: currency_code.into(),
        }
    }
}

/// A variant option pair (e.g. Size: Large).
///
/// Option names within one variant are unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantOption {
    /// Option name (e.g. "Size", "Colour").
    pub name: String,
    /// Option value (e.g. "Large", "Black").
    pub value: String,
}

impl VariantOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Variant title (combination of option values).
    pub title: String,
    /// Whether this variant can currently be purchased.
    pub available_for_sale: bool,
    /// Ordered option pairs defining this variant.
    pub options: Vec<VariantOption>,
    /// Stock keeping unit, when exposed.
    #[serde(default)]
    pub sku: Option<String>,
    /// Barcode, when exposed.
    #[serde(default)]
    pub barcode: Option<String>,
    /// Variant price in the currency's major unit, when exposed.
    #[serde(default)]
    pub price: Option<f64>,
}

impl Variant {
    pub fn new(id: impl Into<VariantId>, title: impl Into<String>, available: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            available_for_sale: available,
            options: Vec::new(),
            sku: None,
            barcode: None,
            price: None,
        }
    }

    /// Add an option pair to this variant.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.push(VariantOption::new(name, value));
        self
    }

    /// Value of the named option, if present.
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.value.as_str())
    }
}

/// A product with its merchandising tags and variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title. Colorway products carry the colour as a trailing
    /// `" - "`-delimited segment.
    pub title: String,
    /// Merchandising tags (sparse key-value encoding, see `TagProfile`).
    pub tags: Vec<String>,
    /// Whether any variant can currently be purchased.
    pub available_for_sale: bool,
    /// Minimum variant price.
    #[serde(default)]
    pub min_price: Option<Price>,
    /// Featured image URL.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Ordered variants.
    pub variants: Vec<Variant>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, available: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: Vec::new(),
            available_for_sale: available,
            min_price: None,
            featured_image: None,
            variants: Vec::new(),
        }
    }

    /// Add a tag to this product.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the minimum variant price.
    pub fn with_min_price(mut self, amount: f64, currency: impl Into<String>) -> Self {
        self.min_price = Some(Price::new(amount, currency));
        self
    }

    /// Add a variant to this product.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Check whether the product carries an exact tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Trailing `" - "`-delimited title segment, trimmed.
    ///
    /// Colorway products encode the colour name there; a title without the
    /// delimiter yields the whole title.
    pub fn colorway_name(&self) -> &str {
        self.title.rsplit(" - ").next().unwrap_or(&self.title).trim()
    }

    /// Ratio of available variants to total variants.
    ///
    /// `None` when the product has no variants at all.
    pub fn availability_ratio(&self) -> Option<f64> {
        if self.variants.is_empty() {
            return None;
        }
        let available = self
            .variants
            .iter()
            .filter(|v| v.available_for_sale)
            .count();
        Some(available as f64 / self.variants.len() as f64)
    }

    /// Whether this is effectively a single-variant product (one variant
    /// titled "Default Title").
    pub fn is_single_default_variant(&self) -> bool {
        self.variants.len() == 1 && self.variants[0].title == "Default Title"
    }
}
