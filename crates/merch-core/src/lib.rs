//! Core abstractions for the merchandising widgets.
//!
//! This crate provides the fundamental configuration and context types:
//! - `Region` / `RegionProfile` - Per-region storefront configuration
//! - `PageContext` - URL and ambient page state with fallback resolution

mod config;
mod context;

pub use config::*;
pub use context::*;
