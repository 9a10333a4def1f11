//! Toolbar command handling.

use tracing::{debug, info, warn};

use lantern_chrome::{resolve_input, ChromeCommand, ChromeUpdate};

use super::core::LanternApp;

impl LanternApp {
    /// Drain the toolbar command queue and forward each command to the
    /// page surface, in arrival order.
    pub(super) fn drain_chrome_commands(&self) {
        let (Some(toolbar), Some(surface)) = (&self.toolbar, &self.surface) else {
            return;
        };

        for command in toolbar.drain_commands() {
            match command {
                ChromeCommand::Navigate { text } => match resolve_input(&text) {
                    Ok(url) => {
                        surface.navigate(url);
                        // Submitting the address hands keyboard focus
                        // from the entry to the page being loaded.
                        if let Err(e) = surface.focus() {
                            warn!(error = %e, "page focus failed");
                        }
                    }
                    Err(e) => {
                        // Recoverable: tell the user, leave the page alone.
                        info!(input = %text, error = %e, "address rejected");
                        toolbar.push_update(&ChromeUpdate::Alert {
                            message: e.to_string(),
                        });
                    }
                },
                ChromeCommand::Back => surface.go_back(),
                ChromeCommand::Forward => surface.go_forward(),
                ChromeCommand::Reload => surface.reload(),
                ChromeCommand::DismissAlert => debug!("alert dismissed"),
            }
        }
    }
}
