//! Size-guide page fetch.

use serde::Deserialize;
use serde_json::json;

use crate::{StorefrontClient, StorefrontError};

const SIZE_GUIDE_QUERY: &str = r#"#graphql
query productSizeGuide($pageHandle: String!, $countryCode: CountryCode!) @inContext(country: $countryCode) {
    page(handle: $pageHandle) {
        body
    }
}
"#;

#[derive(Debug, Deserialize)]
struct PageData {
    page: Option<PageNode>,
}

#[derive(Debug, Deserialize)]
struct PageNode {
    body: Option<String>,
}

impl StorefrontClient {
    /// Fetch the size-guide page body for a product's size-chart tag.
    ///
    /// The page handle is the full `SizeChart_*` tag, passed through
    /// verbatim. `Ok(None)` when the page does not exist.
    pub async fn size_guide(
        &self,
        page_handle: &str,
        country: &str,
    ) -> Result<Option<String>, StorefrontError> {
        let data: PageData = self
            .execute(
                SIZE_GUIDE_QUERY,
                json!({"pageHandle": page_handle, "countryCode": country}),
            )
            .await?;
        Ok(data.page.and_then(|p| p.body))
    }
}
