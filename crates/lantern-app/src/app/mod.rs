//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the
//! main event loop. Coordinates the window, the toolbar chrome
//! webview, and the page surface.

mod chrome_bridge;
mod commands;
mod core;
mod event_handler;
mod init;
mod layout;
mod polling;
mod reflect;
mod shutdown;
mod signals;

pub use core::LanternApp;
