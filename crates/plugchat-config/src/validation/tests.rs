//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = PlugchatConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = PlugchatConfig::default();
    config.completion.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.temperature"));
}

#[test]
fn azure_requires_endpoint() {
    let mut config = PlugchatConfig::default();
    config.completion.provider = Provider::Azure;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.endpoint is required"));

    config.completion.endpoint = Some("https://resource.openai.azure.com".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_malformed_endpoint_url() {
    let mut config = PlugchatConfig::default();
    config.completion.endpoint = Some("api.openai.com/v1".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.endpoint"));
}

#[test]
fn catches_bad_api_key_env_name() {
    let mut config = PlugchatConfig::default();
    config.completion.api_key_env = "OPEN AI KEY".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("completion.api_key_env"));
}

#[test]
fn accepts_base_url_with_port_and_path() {
    let mut config = PlugchatConfig::default();
    config.rest_api.base_url = "http://127.0.0.1:8080/api/v1".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_base_url_without_scheme() {
    let mut config = PlugchatConfig::default();
    config.rest_api.base_url = "localhost:8000".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("rest_api.base_url"));
}

#[test]
fn catches_unsupported_endpoint_method() {
    let mut config = PlugchatConfig::default();
    config.rest_api.endpoints[0].method = "PATCH".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("rest_api.endpoints[0].method"));
}

#[test]
fn catches_endpoint_url_not_a_path() {
    let mut config = PlugchatConfig::default();
    config.rest_api.endpoints[2].url = "industry".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("rest_api.endpoints[2].url"));
}

#[test]
fn catches_max_tool_hops_bounds() {
    let mut config = PlugchatConfig::default();
    config.session.max_tool_hops = 0;
    assert!(validate(&config)
        .unwrap_err()
        .to_string()
        .contains("session.max_tool_hops"));

    config.session.max_tool_hops = 51;
    assert!(validate(&config).is_err());

    config.session.max_tool_hops = 50;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_blank_degraded_message() {
    let mut config = PlugchatConfig::default();
    config.session.degraded_message = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.degraded_message"));
}

#[test]
fn collects_all_errors() {
    let mut config = PlugchatConfig::default();
    config.completion.request_timeout_secs = 0;
    config.rest_api.request_timeout_secs = 0;
    config.session.plugin_timeout_secs = 0;
    let err = validate(&config).unwrap_err();
    assert!(matches!(err, plugchat_common::ConfigError::ValidationError(_)));
    let msg = err.to_string();
    assert!(msg.contains("completion.request_timeout_secs"));
    assert!(msg.contains("rest_api.request_timeout_secs"));
    assert!(msg.contains("session.plugin_timeout_secs"));
}
