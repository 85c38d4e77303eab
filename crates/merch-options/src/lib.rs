//! Option group resolution and variant selection.
//!
//! This crate implements the merchandising core as pure functions over
//! already-fetched data:
//! - `resolve_color_groups` - Colorway siblings filtered, ranked and given
//!   display swatches
//! - `resolve_option_groups` - Attribute categories as cross-constrained,
//!   canonically sorted option groups
//! - `SelectionState` - The variant selection state machine with the
//!   availability-aware disabled rule
//!
//! Fetching and failure degradation live with the callers; everything here
//! is total and recomputed on demand, never cached.

mod attribute;
mod color;
mod selection;
mod swatch;

pub use attribute::*;
pub use color::*;
pub use selection::*;
pub use swatch::*;
