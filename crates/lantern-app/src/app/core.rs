//! LanternApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use url::Url;
use winit::window::Window;

use lantern_config::LanternConfig;
use lantern_surface::PageSurface;

use super::chrome_bridge::ToolbarChrome;

/// Top-level application state.
pub struct LanternApp {
    pub(super) config: LanternConfig,
    /// First page to load, CLI override already applied.
    pub(super) startup_url: Url,

    // Windowing — populated in `resumed`, cleared by shutdown.
    pub(super) window: Option<Arc<Window>>,
    pub(super) toolbar: Option<ToolbarChrome>,
    pub(super) surface: Option<PageSurface>,

    pub(super) last_poll: Instant,
}

impl LanternApp {
    pub fn new(config: LanternConfig, startup_url: Url) -> Self {
        Self {
            config,
            startup_url,
            window: None,
            toolbar: None,
            surface: None,
            last_poll: Instant::now(),
        }
    }
}
