//! Product, variant and merchandising-tag model.
//!
//! This crate provides the catalog data types shared by the widgets:
//! - `ProductId` / `VariantId` - Typed identifiers with GID conversion
//! - `Product` / `Variant` / `VariantOption` - The catalog model
//! - `TagProfile` / `OptionCategory` - Typed decode of the tag grammar
//! - `LocatorProduct` - Flattened wire projection for the locator frames

mod ids;
mod locator;
mod product;
mod tags;

pub use ids::*;
pub use locator::*;
pub use product::*;
pub use tags::*;
