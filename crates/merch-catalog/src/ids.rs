//! Newtype IDs with global-id (GID) conversion.
//!
//! Identifiers travel in two encodings: the GID form used by the storefront
//! API (`gid://shopify/Product/123`) and the bare numeric form used in URLs
//! and the locator wire format. The newtypes hold the numeric form and
//! convert on demand; a malformed GID simply yields no id.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $resource:literal) => {
        /// A unique identifier, stored in bare numeric form.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from a bare numeric string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse an ID out of a GID string.
            ///
            /// Accepts a bare numeric id as well, so values arriving from
            /// either encoding normalize to the same type.
            pub fn from_gid(gid: &str) -> Option<Self> {
                let tail = gid.rsplit('/').next()?;
                let digits = tail.split('?').next().unwrap_or(tail);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                Some(Self(digits.to_string()))
            }

            /// Encode as a GID string.
            pub fn to_gid(&self) -> String {
                format!(concat!("gid://shopify/", $resource, "/{}"), self.0)
            }

            /// Get the numeric ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId, "Product");
define_id!(VariantId, "ProductVariant");
