//! Toolbar chrome webview: hosts the bundled toolbar document and
//! bridges its typed command/update protocol.
//!
//! Commands posted by the document land in a queue the event loop
//! drains; updates go the other way by evaluating the dispatch snippet.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use lantern_chrome::{js_dispatch_update, ChromeCommand, ChromeUpdate};
use lantern_chrome::{CHROME_INIT_SCRIPT, TOOLBAR_HTML};

/// The toolbar strip webview plus its pending command queue.
pub struct ToolbarChrome {
    webview: WebView,
    commands: Arc<Mutex<Vec<ChromeCommand>>>,
}

impl ToolbarChrome {
    /// Create the toolbar as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
    ) -> Result<Self, wry::Error> {
        let commands: Arc<Mutex<Vec<ChromeCommand>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&commands);

        let webview = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_html(TOOLBAR_HTML)
            .with_initialization_script(CHROME_INIT_SCRIPT)
            .with_ipc_handler(move |request| {
                let body = request.body();
                match ChromeCommand::from_json(body) {
                    Some(command) => {
                        debug!(?command, "toolbar command");
                        if let Ok(mut queue) = sink.lock() {
                            queue.push(command);
                        }
                    }
                    None => warn!(
                        body_len = body.len(),
                        "toolbar message rejected: not a valid command"
                    ),
                }
            })
            .with_focused(true)
            .build_as_child(window)?;

        debug!("toolbar chrome created");
        Ok(Self { webview, commands })
    }

    /// Drain all pending commands, in arrival order.
    pub fn drain_commands(&self) -> Vec<ChromeCommand> {
        self.commands
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }

    /// Deliver a state update to the toolbar document.
    pub fn push_update(&self, update: &ChromeUpdate) {
        let script = js_dispatch_update(update);
        if let Err(e) = self.webview.evaluate_script(&script) {
            warn!(error = %e, "failed to push toolbar update");
        }
    }

    /// Reposition the toolbar within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
