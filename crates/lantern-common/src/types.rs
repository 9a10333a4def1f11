use serde::{Deserialize, Serialize};
use url::Url;

/// A rectangle in logical window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A point-in-time view of the web surface's navigation state.
///
/// Snapshots are produced by the surface on demand and consumed by the
/// toolbar projection; neither side holds on to one across events.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceSnapshot {
    /// Whether a page load is currently in flight.
    pub is_loading: bool,
    /// Load progress in `[0, 1]`. Reaches exactly 1.0 when the load
    /// completes.
    pub estimated_progress: f64,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// The committed URL, if any page has ever committed.
    pub current_url: Option<Url>,
}

impl Default for SurfaceSnapshot {
    fn default() -> Self {
        Self {
            is_loading: false,
            estimated_progress: 0.0,
            can_go_back: false,
            can_go_forward: false,
            current_url: None,
        }
    }
}
