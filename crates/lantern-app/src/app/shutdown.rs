//! Graceful shutdown: drop both webviews, then the window.

use super::core::LanternApp;

impl LanternApp {
    /// Tear everything down. Children go before the parent window;
    /// dropping a wry webview destroys the platform view.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating shutdown");

        self.surface = None;
        self.toolbar = None;
        self.window = None;

        tracing::info!("Shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use lantern_config::LanternConfig;

    use crate::app::LanternApp;

    fn fresh_app() -> LanternApp {
        let config = LanternConfig::default();
        let url = Url::parse(&config.startup.homepage).unwrap();
        LanternApp::new(config, url)
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = fresh_app();
        app.shutdown();
        assert!(app.window.is_none());
        assert!(app.toolbar.is_none());
        assert!(app.surface.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = fresh_app();
        app.shutdown();
        app.shutdown(); // second call must not panic
        assert!(app.surface.is_none());
    }
}
