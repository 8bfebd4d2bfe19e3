pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, LumenError, PlatformError};
pub use types::{Color, ScissorRect};

pub type Result<T> = std::result::Result<T, LumenError>;
