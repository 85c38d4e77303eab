//! Per-iframe height and drawer visibility coordination.

use std::collections::HashMap;

/// Tracks last-reported content heights and the drawer open flag.
///
/// Rendering contract: a height of exactly 0 means "not yet measured" and
/// shows a loading placeholder; any positive height sizes the container and
/// hides the placeholder.
#[derive(Debug)]
pub struct HeightCoordinator {
    heights: HashMap<String, u32>,
    drawer_open: bool,
    drawer_frame_id: String,
}

impl HeightCoordinator {
    /// Create a coordinator; `drawer_frame_id` is the iframe whose height
    /// resets on drawer open.
    pub fn new(drawer_frame_id: impl Into<String>) -> Self {
        Self {
            heights: HashMap::new(),
            drawer_open: false,
            drawer_frame_id: drawer_frame_id.into(),
        }
    }

    /// Record a reported height for one iframe.
    pub fn record(&mut self, iframe_id: impl Into<String>, height: u32) {
        self.heights.insert(iframe_id.into(), height);
    }

    /// Last-reported height for an iframe; 0 when never reported.
    pub fn height(&self, iframe_id: &str) -> u32 {
        self.heights.get(iframe_id).copied().unwrap_or(0)
    }

    /// Whether an iframe should show its loading placeholder.
    pub fn is_loading(&self, iframe_id: &str) -> bool {
        self.height(iframe_id) == 0
    }

    /// Whether any iframe has reported a height yet.
    pub fn any_reported(&self) -> bool {
        !self.heights.is_empty()
    }

    /// Open the drawer.
    ///
    /// Resets the drawer iframe's height to 0 together with the flag flip
    /// so the loader shows while the drawer content (re)loads.
    pub fn open_drawer(&mut self) {
        self.heights.insert(self.drawer_frame_id.clone(), 0);
        self.drawer_open = true;
    }

    /// Close the drawer.
    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Clear all recorded heights (widget remount).
    pub fn clear(&mut self) {
        self.heights.clear();
        self.drawer_open = false;
    }
}
