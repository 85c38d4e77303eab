//! Composition root for the merchandising widgets.
//!
//! This crate wires the platform crates into the two widgets:
//! - `FindInStoreWidget` - The locator host: message bridge, persisted
//!   state, product snapshot and iframe frame URLs
//! - `ProductOptionsWidget` - The options selector: sibling hydration with
//!   degrade-to-empty semantics, the selection machine and URL deep-link
//!   sync
//! - `LocationPort` - Injected addressable-location seam
//! - `RequestGate` - Generation tagging that discards superseded fetches

mod frames;
mod gate;
mod location;
mod locator;
mod selector;

pub use frames::*;
pub use gate::*;
pub use location::*;
pub use locator::*;
pub use selector::*;
