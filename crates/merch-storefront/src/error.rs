//! Storefront client error types.

use thiserror::Error;

/// Errors that can occur talking to the storefront API.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Request could not be sent or the response body not read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("HTTP error: {status}")]
    Status { status: u16 },

    /// Response body was not a valid GraphQL envelope.
    #[error("Deserialization error: {0}")]
    Decode(String),

    /// The envelope carried GraphQL errors.
    #[error("GraphQL error: {0}")]
    Graphql(String),

    /// The envelope carried neither data nor errors.
    #[error("GraphQL response missing data")]
    MissingData,
}
