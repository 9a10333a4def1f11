//! Configuration validation.
//!
//! Checks numeric ranges, the homepage URL, and the log level, and
//! collects every failure into a single `ConfigError` so the user sees
//! all problems at once.

use lantern_common::ConfigError;
use url::Url;

use crate::schema::LanternConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LanternConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_startup(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &LanternConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 320, 16384);
    validate_range(errors, "window.height", w.height, 240, 16384);
    validate_range(errors, "window.toolbar_height", w.toolbar_height, 24, 200);
    if w.toolbar_height >= w.height {
        errors.push(format!(
            "window.toolbar_height = {} must be smaller than window.height = {}",
            w.toolbar_height, w.height
        ));
    }
}

fn validate_startup(errors: &mut Vec<String>, config: &LanternConfig) {
    match Url::parse(&config.startup.homepage) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(format!(
            "startup.homepage has unsupported scheme {:?} (expected http or https)",
            url.scheme()
        )),
        Err(e) => errors.push(format!(
            "startup.homepage = {:?} is not a valid url: {e}",
            config.startup.homepage
        )),
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &LanternConfig) {
    let level = config.logging.level.as_str();
    if !LOG_LEVELS.contains(&level) {
        errors.push(format!(
            "logging.level = {level:?} is not one of {LOG_LEVELS:?}"
        ));
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LanternConfig;

    #[test]
    fn default_config_validates() {
        assert!(validate(&LanternConfig::default()).is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        let mut config = LanternConfig::default();
        config.window.width = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("window.width"));
    }

    #[test]
    fn toolbar_strictly_inside_window_height() {
        let mut config = LanternConfig::default();
        config.window.height = 240;
        config.window.toolbar_height = 200;
        assert!(validate(&config).is_ok());

        config.window.toolbar_height = 240;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("toolbar_height"));
    }

    #[test]
    fn homepage_must_be_http_or_https() {
        let mut config = LanternConfig::default();
        config.startup.homepage = "file:///etc/passwd".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));

        config.startup.homepage = "not a url at all".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("not a valid url"));
    }

    #[test]
    fn unknown_log_level_rejected() {
        let mut config = LanternConfig::default();
        config.logging.level = "verbose".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn multiple_errors_are_joined() {
        let mut config = LanternConfig::default();
        config.window.width = 0;
        config.logging.level = "loud".into();
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("window.width"));
        assert!(msg.contains("logging.level"));
        assert!(msg.contains("; "));
    }
}
