//! Sibling product fetches for the option resolution engine.

use merch_catalog::{Product, TagProfile};
use serde::Deserialize;
use serde_json::json;

use crate::response::{Nodes, ProductNode};
use crate::{StorefrontClient, StorefrontError};

/// Product search document shared by both sibling axes.
const PRODUCT_SEARCH_QUERY: &str = r#"#graphql
query searchProducts($query: String!, $countryCode: CountryCode!) @inContext(country: $countryCode) {
    products(first: 50, query: $query) {
        nodes {
            id
            title
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
            variants(first: 25) {
                nodes {
                    id
                    availableForSale
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
struct SearchData {
    products: Nodes<ProductNode>,
}

/// The two sibling candidate sets feeding group resolution.
#[derive(Debug, Default)]
pub struct SiblingSets {
    /// Colorway siblings sharing the current product's handle tag.
    pub colors: Vec<Product>,
    /// Attribute-group siblings sharing group + swatch tags within the same
    /// `batch:OG` partition.
    pub groups: Vec<Product>,
}

/// Search string for the color axis.
pub fn color_sibling_query(handle_tag: &str) -> String {
    format!("tag:\"{handle_tag}\"")
}

/// Search string for the attribute axis.
///
/// OG batch products only compare against other OG batch products, and
/// non-OG only against non-OG.
pub fn group_sibling_query(group_tag: &str, swatch_tag: &str, og_batch: bool) -> String {
    let batch = if og_batch {
        "tag:'batch:OG'"
    } else {
        "NOT tag:'batch:OG'"
    };
    format!("tag:\"{group_tag}\" AND tag:\"{swatch_tag}\" AND {batch}")
}

impl StorefrontClient {
    async fn search_products(
        &self,
        query: &str,
        country: &str,
    ) -> Result<Vec<Product>, StorefrontError> {
        let data: SearchData = self
            .execute(
                PRODUCT_SEARCH_QUERY,
                json!({"query": query, "countryCode": country}),
            )
            .await?;
        Ok(data
            .products
            .nodes
            .into_iter()
            .map(ProductNode::into_product)
            .collect())
    }

    /// Fetch colorway siblings for a handle tag.
    pub async fn color_siblings(
        &self,
        handle_tag: &str,
        country: &str,
    ) -> Result<Vec<Product>, StorefrontError> {
        self.search_products(&color_sibling_query(handle_tag), country)
            .await
    }

    /// Fetch attribute-group siblings for group + swatch tags.
    pub async fn group_siblings(
        &self,
        group_tag: &str,
        swatch_tag: &str,
        og_batch: bool,
        country: &str,
    ) -> Result<Vec<Product>, StorefrontError> {
        self.search_products(&group_sibling_query(group_tag, swatch_tag, og_batch), country)
            .await
    }

    /// Fetch both sibling sets for a product's tag profile.
    ///
    /// An axis whose grouping tags are absent is skipped without a network
    /// call and contributes an empty set.
    pub async fn sibling_sets(
        &self,
        tags: &TagProfile,
        country: &str,
    ) -> Result<SiblingSets, StorefrontError> {
        let colors = async {
            match tags.handle_tag.as_deref() {
                Some(handle) => self.color_siblings(handle, country).await,
                None => Ok(Vec::new()),
            }
        };
        let groups = async {
            match (tags.group_tag.as_deref(), tags.swatch_tag.as_deref()) {
                (Some(group), Some(swatch)) => {
                    self.group_siblings(group, swatch, tags.og_batch, country).await
                }
                _ => Ok(Vec::new()),
            }
        };

        let (colors, groups) = futures::try_join!(colors, groups)?;
        Ok(SiblingSets { colors, groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_query() {
        assert_eq!(
            color_sibling_query("handle-rep-tight"),
            "tag:\"handle-rep-tight\""
        );
    }

    #[test]
    fn test_group_query_og_partition() {
        assert_eq!(
            group_sibling_query("YGroup_rep", "colourSwatch:Black|#000000", true),
            "tag:\"YGroup_rep\" AND tag:\"colourSwatch:Black|#000000\" AND tag:'batch:OG'"
        );
        assert_eq!(
            group_sibling_query("YGroup_rep", "colourSwatch:Black|#000000", false),
            "tag:\"YGroup_rep\" AND tag:\"colourSwatch:Black|#000000\" AND NOT tag:'batch:OG'"
        );
    }
}
