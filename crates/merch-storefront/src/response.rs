//! Raw response nodes and their conversion into catalog types.

use merch_catalog::{Price, Product, ProductId, Variant, VariantId, VariantOption};
use serde::Deserialize;

/// A `nodes`-style connection.
#[derive(Debug, Deserialize)]
pub struct Nodes<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyNode {
    pub amount: String,
    #[serde(default)]
    pub currency_code: Option<String>,
}

impl MoneyNode {
    pub fn amount_f64(&self) -> f64 {
        self.amount.parse().unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeNode {
    pub min_variant_price: MoneyNode,
}

#[derive(Debug, Deserialize)]
pub struct ImageNode {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionNode {
    pub name: String,
    pub value: String,
}

/// Variant shape returned by sibling product searches.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: String,
    #[serde(default)]
    pub available_for_sale: bool,
    #[serde(default = "Vec::new")]
    pub selected_options: Vec<OptionNode>,
}

impl VariantNode {
    pub fn into_variant(self) -> Variant {
        let title = self
            .selected_options
            .iter()
            .map(|o| o.value.as_str())
            .collect::<Vec<_>>()
            .join(" / ");
        let id = VariantId::from_gid(&self.id).unwrap_or_else(|| VariantId::new(self.id.clone()));

        let mut variant = Variant::new(id, title, self.available_for_sale);
        variant.options = self
            .selected_options
            .into_iter()
            .map(|o| VariantOption::new(o.name, o.value))
            .collect();
        variant
    }
}

/// Product shape returned by sibling product searches.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    #[serde(default = "Vec::new")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub available_for_sale: bool,
    #[serde(default)]
    pub price_range: Option<PriceRangeNode>,
    #[serde(default)]
    pub featured_image: Option<ImageNode>,
    #[serde(default)]
    pub variants: Option<Nodes<VariantNode>>,
}

impl ProductNode {
    pub fn into_product(self) -> Product {
        let id = ProductId::from_gid(&self.id).unwrap_or_else(|| ProductId::new(self.id.clone()));

        Product {
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
            variants: self
                .variants
                .map(|v| v.nodes.into_iter().map(VariantNode::into_variant).collect())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_node_conversion() {
        let node: ProductNode = serde_json::from_value(json!({
            "id": "gid://shopify/Product/111",
            "title": "Rep Tight - Black",
            "tags": ["handle-rep-tight"],
            "availableForSale": true,
            "priceRange": {"minVariantPrice": {"amount": "79.99", "currencyCode": "AUD"}},
            "featuredImage": {"url": "https://cdn.example.com/img.jpg"},
            "variants": {"nodes": [{
                "id": "gid://shopify/ProductVariant/222",
                "availableForSale": false,
                "selectedOptions": [{"name": "Size", "value": "S"}],
            }]},
        }))
        .unwrap();

        let product = node.into_product();
        assert_eq!(product.id.as_str(), "111");
        assert_eq!(product.min_price.as_ref().unwrap().amount, 79.99);
        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants[0].id.as_str(), "222");
        assert!(!product.variants[0].available_for_sale);
        assert_eq!(product.variants[0].option_value("Size"), Some("S"));
    }

    #[test]
    fn test_unparseable_amount_defaults_to_zero() {
        let money = MoneyNode {
            amount: "not-a-number".to_string(),
            currency_code: None,
        };
        assert_eq!(money.amount_f64(), 0.0);
    }
}
