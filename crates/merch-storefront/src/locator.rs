//! Product detail fetch for the locator widgets.

use merch_catalog::{LocatorProduct, Price, Product, ProductId, Variant, VariantId, VariantOption};
use serde::Deserialize;
use serde_json::json;

use crate::response::{ImageNode, MoneyNode, OptionNode, PriceRangeNode};
use crate::{StorefrontClient, StorefrontError};

const PRODUCT_DETAIL_QUERY: &str = r#"#graphql
query productDetail($id: ID!) {
    product(id: $id) {
        id
        title
        vendor
        productType
        handle
        tags
        availableForSale
        priceRange {
            minVariantPrice {
                amount
                currencyCode
            }
        }
        featuredImage {
            url
        }
        variants(first: 100) {
            edges {
                node {
                    id
                    title
                    availableForSale
                    price {
                        amount
                    }
                    sku
                    barcode
                    selectedOptions {
                        name
                        value
                    }
                }
            }
        }
    }
}
"#;

#[derive(Debug, Deserialize)]
struct DetailData {
    product: Option<DetailProductNode>,
}

#[derive(Debug, Deserialize)]
struct Edges<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailVariantNode {
    id: String,
    title: String,
    #[serde(default)]
    available_for_sale: bool,
    #[serde(default)]
    price: Option<MoneyNode>,
    #[serde(default)]
    sku: Option<String>,
    #[serde(default)]
    barcode: Option<String>,
    #[serde(default = "Vec::new")]
    selected_options: Vec<OptionNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetailProductNode {
    id: String,
    title: String,
    #[serde(default)]
    vendor: String,
    #[serde(default)]
    product_type: String,
    #[serde(default)]
    handle: String,
    #[serde(default = "Vec::new")]
    tags: Vec<String>,
    #[serde(default)]
    available_for_sale: bool,
    #[serde(default)]
    price_range: Option<PriceRangeNode>,
    #[serde(default)]
    featured_image: Option<ImageNode>,
    variants: Edges<DetailVariantNode>,
}

/// A full product with the extra fields the locator projection needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub vendor: String,
    pub product_type: String,
    pub handle: String,
}

impl ProductDetail {
    /// Project into the locator wire shape.
    pub fn to_locator(&self) -> Option<LocatorProduct> {
        LocatorProduct::from_product(
            &self.product,
            self.vendor.clone(),
            self.product_type.clone(),
            self.handle.clone(),
        )
    }
}

impl DetailProductNode {
    fn into_detail(self) -> ProductDetail {
        let id = ProductId::from_gid(&self.id).unwrap_or_else(|| ProductId::new(self.id.clone()));

        let variants = self
            .variants
            .edges
            .into_iter()
            .map(|e| {
                let node = e.node;
                let id = VariantId::from_gid(&node.id)
                    .unwrap_or_else(|| VariantId::new(node.id.clone()));
                let mut variant = Variant::new(id, node.title, node.available_for_sale);
                variant.options = node
                    .selected_options
                    .into_iter()
                    .map(|o| VariantOption::new(o.name, o.value))
                    .collect();
                variant.price = node.price.map(|p| p.amount_f64());
                variant.sku = node.sku;
                variant.barcode = node.barcode;
                variant
            })
            .collect();

        let product = Product {
            id,
            title: self.title,
            tags: self.tags,
            available_for_sale: self.available_for_sale,
            min_price: self.price_range.map(|r| {
                Price::new(
                    r.min_variant_price.amount_f64(),
                    r.min_variant_price.currency_code.unwrap_or_default(),
                )
            }),
            featured_image: self.featured_image.map(|i| i.url),
            variants,
        };

        ProductDetail {
            product,
            vendor: self.vendor,
            product_type: self.product_type,
            handle: self.handle,
        }
    }
}

impl StorefrontClient {
    /// Fetch one product by id with the locator's detail fields.
    ///
    /// `Ok(None)` when the product does not exist.
    pub async fn product_detail(
        &self,
        id: &ProductId,
    ) -> Result<Option<ProductDetail>, StorefrontError> {
        let data: DetailData = self
            .execute(PRODUCT_DETAIL_QUERY, json!({"id": id.to_gid()}))
            .await?;
        Ok(data.product.map(DetailProductNode::into_detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_node_to_locator() {
        let node: DetailProductNode = serde_json::from_value(serde_json::json!({
            "id": "gid://shopify/Product/111",
            "title": "Rep Tight - Black",
            "vendor": "LSKD",
            "productType": "Tights",
            "handle": "rep-tight-black",
            "tags": ["handle-rep-tight", "YGroup_rep"],
            "availableForSale": true,
            "variants": {"edges": [{"node": {
                "id": "gid://shopify/ProductVariant/222",
                "title": "S / Black",
                "availableForSale": true,
                "price": {"amount": "79.99"},
                "sku": "RT-S-BLK",
                "barcode": "930000000",
                "selectedOptions": [
                    {"name": "Size", "value": "S"},
                    {"name": "Colour", "value": "Black"},
                ],
            }}]},
        }))
        .unwrap();

        let detail = node.into_detail();
        assert_eq!(detail.vendor, "LSKD");
        assert_eq!(detail.product.variants[0].price, Some(79.99));

        let wire = detail.to_locator().unwrap();
        assert_eq!(wire.id, 111);
        assert_eq!(wire.handle, "rep-tight-black");
        assert_eq!(wire.variants[0].price, "79.99");
        assert_eq!(wire.variants[0].option1.as_deref(), Some("S"));
        assert_eq!(wire.tags, "handle-rep-tight, YGroup_rep");
    }
}
