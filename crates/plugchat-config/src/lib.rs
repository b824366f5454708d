//! Plugchat configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! Loading only parses. Callers apply their environment and command-line
//! overrides first and then run [`validation::validate`] once on the result.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use plugchat_config::{config_to_json, load_config, validation};
//!
//! let mut config = load_config(None).expect("failed to load config");
//! config.rest_api.base_url = "http://localhost:9000".into();
//! validation::validate(&config).expect("invalid config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CompletionConfig, EndpointConfig, LogLevel, LoggingConfig, PlugchatConfig, Provider,
    RestApiConfig, SessionConfig,
};
pub use toml_loader::ConfigSource;

use std::path::Path;

use plugchat_common::ConfigError;

/// Read the configuration without validating it.
///
/// With an explicit `path` the file must exist. Without one, `config.toml`
/// is read from the OS config directory and created from the template if
/// absent.
pub fn load_config(path: Option<&Path>) -> Result<PlugchatConfig, ConfigError> {
    ConfigSource::resolve(path)?.load()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PlugchatConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
