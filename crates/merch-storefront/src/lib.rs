//! GraphQL storefront API client.
//!
//! This crate provides:
//! - `StorefrontClient` - POST `{query, variables}` against the region's
//!   `graphql.json` endpoint with the storefront access token
//! - Sibling-set fetches for the option resolution engine
//! - Product detail fetch for the locator widgets
//! - Size-guide page fetch
//!
//! Failures surface as `StorefrontError`; callers at the widget boundary
//! degrade them to empty results per the error handling design.

mod client;
mod error;
mod graphql;
mod locator;
mod pages;
mod response;
mod siblings;

pub use client::*;
pub use error::*;
pub use graphql::*;
pub use locator::*;
pub use siblings::*;
