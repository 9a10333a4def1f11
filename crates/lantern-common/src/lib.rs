pub mod errors;
pub mod types;

pub use errors::{AddressError, ConfigError, LanternError};
pub use types::{Rect, SurfaceSnapshot};

pub type Result<T> = std::result::Result<T, LanternError>;
