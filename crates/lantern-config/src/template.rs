//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Lantern configuration
# Only override what you want to change -- missing fields use defaults.

[window]
# width = 1024
# height = 768
# toolbar_height = 44    # logical pixels; the page fills the rest
# title = "Lantern"
# dynamic_title = true   # follow the page title

[startup]
# homepage = "https://www.wikipedia.org"

[surface]
# user_agent = ""        # empty means the engine default
# devtools = false
# autoplay = false
# clipboard = true

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
