//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use lantern_chrome::{ChromeUpdate, ControlsState, ProgressState};
use lantern_common::{LanternError, Result};
use lantern_surface::{PageSurface, SurfaceOptions};

use super::chrome_bridge::ToolbarChrome;
use super::core::LanternApp;
use super::layout;

impl LanternApp {
    /// Create the window and both child webviews, seed the toolbar with
    /// the launch state, and issue the initial load.
    /// Returns `false` if initialization failed and the event loop
    /// should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        match self.try_initialize(event_loop) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Startup failed: {e}");
                false
            }
        }
    }

    fn try_initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| LanternError::Window(e.to_string()))?;

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let (toolbar_rect, page_rect) = layout::split_viewport(
            size.width,
            size.height,
            f64::from(self.config.window.toolbar_height),
        );

        let toolbar = ToolbarChrome::create(window.as_ref(), layout::to_wry_rect(&toolbar_rect))
            .map_err(|e| LanternError::Surface(format!("toolbar webview: {e}")))?;

        let options = SurfaceOptions {
            user_agent: match self.config.surface.user_agent.as_str() {
                "" => None,
                ua => Some(ua.to_string()),
            },
            devtools: self.config.surface.devtools,
            autoplay: self.config.surface.autoplay,
            clipboard: self.config.surface.clipboard,
        };
        let surface =
            PageSurface::create(window.as_ref(), layout::to_wry_rect(&page_rect), &options)
                .map_err(|e| LanternError::Surface(format!("page webview: {e}")))?;

        // Seed the toolbar launch state: no history either way yet,
        // progress hidden, address entry showing what is about to load.
        let controls = ControlsState::disabled();
        toolbar.push_update(&ChromeUpdate::Controls {
            back_enabled: controls.back_enabled,
            forward_enabled: controls.forward_enabled,
        });
        let progress = ProgressState::idle();
        toolbar.push_update(&ChromeUpdate::Progress {
            visible: progress.visible,
            value: progress.value,
            animate: false,
        });
        toolbar.push_update(&ChromeUpdate::Address {
            url: self.startup_url.to_string(),
        });

        surface.navigate(self.startup_url.clone());

        self.window = Some(window);
        self.toolbar = Some(toolbar);
        self.surface = Some(surface);
        tracing::info!(url = %self.startup_url, "Window created, initial load issued");
        Ok(())
    }
}
