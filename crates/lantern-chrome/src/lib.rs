//! Toolkit-free toolbar logic.
//!
//! The controls snapshot, the pure navigation-state projection, the
//! address-entry resolution rules, and the typed command/update
//! protocol spoken with the toolbar webview. Nothing in this crate
//! touches `wry` or `winit`, so all of it is unit testable.

pub mod controls;
pub mod omnibox;
pub mod protocol;

pub use controls::{ControlsState, ProgressState};
pub use omnibox::resolve_input;
pub use protocol::{
    js_dispatch_update, ChromeCommand, ChromeUpdate, CHROME_INIT_SCRIPT, TOOLBAR_HTML,
};
