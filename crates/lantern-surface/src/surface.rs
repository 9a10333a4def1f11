//! wry shell around the navigation state machine.
//!
//! `PageSurface` owns the child webview and the shared `SurfaceState`.
//! Engine callbacks lock the state briefly to append signals; the event
//! loop drains them at poll time. Traversal has no native wry API, so
//! back/forward are driven through session-history script evaluation.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use url::Url;
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use lantern_common::SurfaceSnapshot;

use crate::signal::SurfaceSignal;
use crate::state::{EngineCommand, SurfaceState};

/// Options for creating the page surface.
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    /// Custom user agent string; `None` keeps the platform default.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            autoplay: false,
            clipboard: true,
        }
    }
}

/// Blank page rendered until the first navigation is issued.
const BOOT_PAGE: &str = "<!DOCTYPE html><html><body></body></html>";

/// The embedded page surface: a child webview plus the shared
/// navigation state fed by its engine callbacks.
pub struct PageSurface {
    webview: WebView,
    state: Arc<Mutex<SurfaceState>>,
}

impl PageSurface {
    /// Create the surface as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        options: &SurfaceOptions,
    ) -> Result<Self, wry::Error> {
        let state = Arc::new(Mutex::new(SurfaceState::new()));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(options.devtools)
            .with_clipboard(options.clipboard)
            .with_autoplay(options.autoplay)
            .with_focused(false)
            .with_html(BOOT_PAGE);

        if let Some(ua) = &options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_navigation_handler(builder, Arc::clone(&state));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&state));
        builder = Self::attach_title_handler(builder, Arc::clone(&state));

        let webview = builder.build_as_child(window)?;
        debug!("page surface created");

        Ok(Self { webview, state })
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Load `url`, superseding any in-flight load.
    pub fn navigate(&self, url: Url) {
        debug!(url = %url, "navigate");
        let command = self.state.lock().ok().and_then(|mut s| s.navigate(url));
        self.execute(command);
    }

    /// Walk back one history entry. No-op when nothing is behind.
    pub fn go_back(&self) {
        let command = self.state.lock().ok().and_then(|mut s| s.go_back());
        self.execute(command);
    }

    /// Walk forward one history entry. No-op when nothing is ahead.
    pub fn go_forward(&self) {
        let command = self.state.lock().ok().and_then(|mut s| s.go_forward());
        self.execute(command);
    }

    /// Reload the current page. No-op when no page has ever committed.
    pub fn reload(&self) {
        let command = self.state.lock().ok().and_then(|mut s| s.reload());
        self.execute(command);
    }

    /// Run an engine command, routing any engine error back through the
    /// failure path so it surfaces as a `NavigationFailed` signal.
    fn execute(&self, command: Option<EngineCommand>) {
        let Some(command) = command else {
            return;
        };
        let result = match &command {
            EngineCommand::Load(url) => self.webview.load_url(url.as_str()),
            EngineCommand::TraverseBack => self.webview.evaluate_script("history.back()"),
            EngineCommand::TraverseForward => self.webview.evaluate_script("history.forward()"),
        };
        if let Err(e) = result {
            warn!(?command, error = %e, "engine command failed");
            if let Ok(mut state) = self.state.lock() {
                state.load_failed(format!("navigation failed: {e}"));
            }
        }
    }

    // =========================================================================
    // READ SIDE
    // =========================================================================

    /// Current navigation snapshot.
    pub fn snapshot(&self) -> SurfaceSnapshot {
        self.state.lock().map(|s| s.snapshot()).unwrap_or_default()
    }

    /// Drain pending signals in push order.
    pub fn drain_signals(&self) -> Vec<SurfaceSignal> {
        self.state
            .lock()
            .map(|mut s| s.drain())
            .unwrap_or_default()
    }

    /// Reposition the surface within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Focus the page content.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    // =========================================================================
    // ENGINE CALLBACKS
    // =========================================================================

    fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        state: Arc<Mutex<SurfaceState>>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            match Url::parse(&url) {
                Ok(parsed) => {
                    if let Ok(mut state) = state.lock() {
                        state.navigation_started(parsed);
                    }
                }
                Err(e) => debug!(url = %url, error = %e, "unparseable navigation URL"),
            }
            // The engine decides what it can load; this layer never blocks.
            true
        })
    }

    fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        state: Arc<Mutex<SurfaceState>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            if let Ok(mut state) = state.lock() {
                match event {
                    wry::PageLoadEvent::Started => match Url::parse(&url) {
                        Ok(parsed) => state.page_load_started(parsed),
                        Err(e) => debug!(url = %url, error = %e, "unparseable commit URL"),
                    },
                    wry::PageLoadEvent::Finished => state.page_load_finished(url),
                }
            }
        })
    }

    fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        state: Arc<Mutex<SurfaceState>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            if let Ok(mut state) = state.lock() {
                state.title_changed(title);
            }
        })
    }
}
