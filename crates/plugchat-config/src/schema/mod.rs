//! Configuration schema types for Plugchat.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod completion;
mod logging;
mod rest_api;
mod session;

pub use completion::*;
pub use logging::*;
pub use rest_api::*;
pub use session::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Plugchat.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlugchatConfig {
    pub completion: CompletionConfig,
    pub rest_api: RestApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}
