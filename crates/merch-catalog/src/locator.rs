//! Flattened product projection for the in-store locator frames.
//!
//! The locator service predates the GraphQL storefront API and consumes the
//! legacy REST product shape: bare numeric ids, tags joined into one
//! comma-separated string, option values flattened into three positional
//! slots, and prices as two-decimal strings.

use serde::{Deserialize, Serialize};

use crate::{Product, Variant};

/// A variant in the locator wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatorVariant {
    pub id: u64,
    pub product_id: u64,
    pub title: String,
    /// Price as a two-decimal string (e.g. "79.99").
    pub price: String,
    pub sku: String,
    pub option1: Option<String>,
    pub option2: Option<String>,
    pub option3: Option<String>,
    pub barcode: String,
}

/// A product in the locator wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatorProduct {
    pub id: u64,
    pub title: String,
    pub vendor: String,
    pub product_type: String,
    pub handle: String,
    /// Comma-joined tag list.
    pub tags: String,
    pub variants: Vec<LocatorVariant>,
}

impl LocatorProduct {
    /// Project a catalog product into the locator wire shape.
    ///
    /// Products whose id does not parse as a number yield `None` (the
    /// locator cannot address them).
    pub fn from_product(
        product: &Product,
        vendor: impl Into<String>,
        product_type: impl Into<String>,
        handle: impl Into<String>,
    ) -> Option<Self> {
        let product_id: u64 = product.id.as_str().parse().ok()?;

        let variants = product
            .variants
            .iter()
            .filter_map(|v| LocatorVariant::from_variant(v, product_id))
            .collect();

        Some(Self {
            id: product_id,
            title: product.title.clone(),
            vendor: vendor.into(),
            product_type: product_type.into(),
            handle: handle.into(),
            tags: product.tags.join(", "),
            variants,
        })
    }
}

impl LocatorVariant {
    fn from_variant(variant: &Variant, product_id: u64) -> Option<Self> {
        let id: u64 = variant.id.as_str().parse().ok()?;
        let mut slots = variant.options.iter().map(|o| o.value.clone());

        Some(Self {
            id,
            product_id,
            title: variant.title.clone(),
            price: format!("{:.2}", variant.price.unwrap_or(0.0)),
            sku: variant.sku.clone().unwrap_or_default(),
            option1: slots.next(),
            option2: slots.next(),
            option3: slots.next(),
            barcode: variant.barcode.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection() {
        let mut variant = Variant::new("222", "S / Black", true)
            .with_option("Size", "S")
            .with_option("Colour", "Black");
        variant.price = Some(79.9);
        variant.sku = Some("RT-S-BLK".to_string());

        let product = Product::new("111", "Rep Tight - Black", true)
            .with_tag("handle-rep-tight")
            .with_tag("YGroup_rep")
            .with_variant(variant);

        let wire =
            LocatorProduct::from_product(&product, "LSKD", "Tights", "rep-tight-black").unwrap();

        assert_eq!(wire.id, 111);
        assert_eq!(wire.tags, "handle-rep-tight, YGroup_rep");
        assert_eq!(wire.variants.len(), 1);

        let v = &wire.variants[0];
        assert_eq!(v.id, 222);
        assert_eq!(v.product_id, 111);
        assert_eq!(v.price, "79.90");
        assert_eq!(v.option1.as_deref(), Some("S"));
        assert_eq!(v.option2.as_deref(), Some("Black"));
        assert_eq!(v.option3, None);
        assert_eq!(v.barcode, "");
    }

    #[test]
    fn test_non_numeric_id_rejected() {
        let product = Product::new("not-numeric", "Broken", true);
        assert!(LocatorProduct::from_product(&product, "", "", "").is_none());
    }
}
