//! Storefront fetch client.

use merch_core::RegionProfile;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{GraphqlResponse, StorefrontError};

/// Header carrying the public storefront access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Client for the storefront GraphQL API.
pub struct StorefrontClient {
    http: reqwest::Client,
    profile: RegionProfile,
    endpoint: String,
}

impl StorefrontClient {
    /// Create a client for a region profile.
    pub fn new(profile: RegionProfile) -> Self {
        let endpoint = profile.graphql_endpoint();
        Self {
            http: reqwest::Client::new(),
            profile,
            endpoint,
        }
    }

    /// Override the endpoint URL (tests, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The region profile this client serves.
    pub fn profile(&self) -> &RegionProfile {
        &self.profile
    }

    /// Execute a GraphQL document and deserialize its `data`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, StorefrontError> {
        tracing::debug!(endpoint = %self.endpoint, "executing storefront query");
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.profile.access_token)
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await
            .map_err(|e| StorefrontError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| StorefrontError::Transport(e.to_string()))?;

        let envelope: GraphqlResponse<T> =
            serde_json::from_str(&body).map_err(|e| StorefrontError::Decode(e.to_string()))?;

        if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
            let joined = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(StorefrontError::Graphql(joined));
        }

        envelope.data.ok_or(StorefrontError::MissingData)
    }
}
