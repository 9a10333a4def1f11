//! Configuration schema.
//!
//! Every section carries `#[serde(default)]` so partial config files
//! work out of the box; missing fields quietly take their defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the browser shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LanternConfig {
    pub window: WindowConfig,
    pub startup: StartupConfig,
    pub surface: SurfaceConfig,
    pub logging: LoggingConfig,
}

/// Window size and title behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Height of the toolbar strip in logical pixels. The page surface
    /// fills the remainder of the window below it.
    pub toolbar_height: u32,
    /// Static window title.
    pub title: String,
    /// Update the window title with the page-reported title.
    pub dynamic_title: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            toolbar_height: 44,
            title: "Lantern".into(),
            dynamic_title: true,
        }
    }
}

/// What to load when the window opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StartupConfig {
    /// URL loaded automatically when the window appears.
    pub homepage: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            homepage: "https://www.wikipedia.org".into(),
        }
    }
}

/// Options forwarded to the embedded web engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Custom user agent string. Empty means the engine default.
    pub user_agent: String,
    /// Whether to enable the engine's dev tools (always on in debug
    /// builds regardless of this setting).
    pub devtools: bool,
    /// Whether to allow media autoplay.
    pub autoplay: bool,
    /// Whether pages may access the clipboard.
    pub clipboard: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            devtools: cfg!(debug_assertions),
            autoplay: false,
            clipboard: true,
        }
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
