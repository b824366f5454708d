pub mod errors;
pub mod id;

pub use errors::{ConfigError, PlugchatError};
pub use id::{SessionId, TurnId};

pub type Result<T> = std::result::Result<T, PlugchatError>;
