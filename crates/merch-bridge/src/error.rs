//! Bridge error types.

use thiserror::Error;

/// Errors that can occur on the cross-frame bridge.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Posting a message to an iframe failed.
    #[error("Failed to post message to iframe {iframe_id}: {reason}")]
    Post { iframe_id: String, reason: String },

    /// An injected action hook failed.
    #[error("Action hook failed: {0}")]
    Hook(String),
}
