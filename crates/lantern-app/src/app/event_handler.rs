//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use tracing::warn;

use super::core::LanternApp;
use super::layout;

impl ApplicationHandler for LanternApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_bounds();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl LanternApp {
    /// Recompute the toolbar/page split and push bounds into both
    /// webviews. Called on every window resize.
    pub(super) fn sync_bounds(&self) {
        let Some(window) = &self.window else {
            return;
        };

        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let (toolbar_rect, page_rect) = layout::split_viewport(
            size.width,
            size.height,
            f64::from(self.config.window.toolbar_height),
        );

        if let Some(toolbar) = &self.toolbar {
            if let Err(e) = toolbar.set_bounds(layout::to_wry_rect(&toolbar_rect)) {
                warn!(error = %e, "failed to resize toolbar");
            }
        }
        if let Some(surface) = &self.surface {
            if let Err(e) = surface.set_bounds(layout::to_wry_rect(&page_rect)) {
                warn!(error = %e, "failed to resize page surface");
            }
        }
    }
}
