use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// The user typed something into the address entry that cannot be
/// turned into a loadable URL. Always recoverable: the shell reports it
/// and leaves the current page alone.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("empty address")]
    Empty,

    #[error("not a loadable address: {0}")]
    Unloadable(String),

    #[error("invalid url {input:?}: {source}")]
    Parse {
        input: String,
        source: url::ParseError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LanternError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("window error: {0}")]
    Window(String),
}
