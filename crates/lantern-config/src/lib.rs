//! Lantern configuration system.
//!
//! Provides TOML-based configuration for the browser shell. All config
//! sections use sensible defaults so partial configs work out of the
//! box, and a missing config file is replaced with a commented template
//! on first run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lantern_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("homepage: {}", config.startup.homepage);
//! ```

pub mod paths;
pub mod schema;
pub mod template;
pub mod validation;

pub use paths::{create_default_config, default_config_path};
pub use schema::{LanternConfig, LoggingConfig, StartupConfig, SurfaceConfig, WindowConfig};
pub use validation::validate;

use lantern_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<LanternConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: LanternConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(
            "config validation warning: {e} — using parsed config with potentially invalid values"
        );
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/lantern/config.toml`
/// On Linux: `~/.config/lantern/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<LanternConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(LanternConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Convenience function to load and strictly validate config from the
/// platform default path.
pub fn load_config() -> Result<LanternConfig, ConfigError> {
    let config = load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_path_applies_serde_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[window]\nwidth = 1280").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 768);
        assert_eq!(config.startup.homepage, "https://www.wikipedia.org");
    }

    #[test]
    fn load_from_path_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(p) if p.ends_with("nope.toml")));
    }

    #[test]
    fn load_from_path_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window\nwidth = ").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(msg) if msg.contains("parse TOML")));
    }

    #[test]
    fn load_from_path_keeps_invalid_values() {
        // Loading is lenient: validation problems are logged, not fatal.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"shouty\"").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.logging.level, "shouty");
        assert!(validation::validate(&config).is_err());
    }
}
