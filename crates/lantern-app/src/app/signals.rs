//! Surface signal handling: reflection into the toolbar and the
//! window title.

use lantern_surface::SurfaceSignal;

use super::core::LanternApp;
use super::reflect;

impl LanternApp {
    /// Drain the surface signal queue and apply each signal: toolbar
    /// updates via the projection, window title directly.
    pub(super) fn drain_surface_signals(&self) {
        let (Some(toolbar), Some(surface)) = (&self.toolbar, &self.surface) else {
            return;
        };

        let signals = surface.drain_signals();
        if signals.is_empty() {
            return;
        }
        let snapshot = surface.snapshot();

        for signal in &signals {
            if let SurfaceSignal::TitleChanged { title } = signal {
                self.apply_title(title);
            }
            for update in reflect::updates_for_signal(signal, &snapshot) {
                toolbar.push_update(&update);
            }
        }
    }

    /// Follow the page title when `dynamic_title` is on; an empty title
    /// falls back to the configured window title.
    fn apply_title(&self, title: &str) {
        if !self.config.window.dynamic_title {
            return;
        }
        let Some(window) = &self.window else {
            return;
        };
        if title.is_empty() {
            window.set_title(&self.config.window.title);
        } else {
            window.set_title(title);
        }
    }
}
