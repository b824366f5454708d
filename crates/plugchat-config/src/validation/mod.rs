//! Full configuration validation.
//!
//! Validates numeric ranges, URL formats, and the endpoint catalogue.
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::PlugchatConfig;
use plugchat_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PlugchatConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_completion(&mut errors, config);
    sections::validate_rest_api(&mut errors, config);
    sections::validate_session(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
