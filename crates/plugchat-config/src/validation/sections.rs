//! Per-section validators.

use super::helpers::{
    validate_env_var, validate_method, validate_not_blank, validate_range, validate_url,
};
use crate::schema::{PlugchatConfig, Provider};

pub(crate) fn validate_completion(errors: &mut Vec<String>, config: &PlugchatConfig) {
    let c = &config.completion;
    validate_range(errors, "completion.temperature", c.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "completion.request_timeout_secs",
        c.request_timeout_secs,
        1,
        600,
    );
    validate_not_blank(errors, "completion.model", &c.model);
    validate_env_var(errors, "completion.api_key_env", &c.api_key_env);
    if let Some(max_tokens) = c.max_tokens {
        validate_range(errors, "completion.max_tokens", max_tokens, 1, 128_000);
    }

    match (&c.endpoint, c.provider) {
        (Some(endpoint), _) => validate_url(errors, "completion.endpoint", endpoint),
        (None, Provider::Azure) => {
            errors.push("completion.endpoint is required when provider = \"azure\"".into())
        }
        (None, Provider::OpenAi) => {}
    }
    if c.provider == Provider::Azure {
        validate_not_blank(errors, "completion.api_version", &c.api_version);
    }
}

pub(crate) fn validate_rest_api(errors: &mut Vec<String>, config: &PlugchatConfig) {
    let r = &config.rest_api;
    validate_url(errors, "rest_api.base_url", &r.base_url);
    validate_range(
        errors,
        "rest_api.request_timeout_secs",
        r.request_timeout_secs,
        1,
        600,
    );

    for (i, endpoint) in r.endpoints.iter().enumerate() {
        let prefix = format!("rest_api.endpoints[{i}]");
        validate_method(errors, &format!("{prefix}.method"), &endpoint.method);
        if !endpoint.url.starts_with('/') {
            errors.push(format!(
                "{prefix}.url = '{}' must be a path starting with '/'",
                endpoint.url
            ));
        }
        validate_not_blank(errors, &format!("{prefix}.description"), &endpoint.description);
    }
}

pub(crate) fn validate_session(errors: &mut Vec<String>, config: &PlugchatConfig) {
    let s = &config.session;
    validate_range(errors, "session.max_tool_hops", s.max_tool_hops, 1, 50);
    validate_range(
        errors,
        "session.completion_timeout_secs",
        s.completion_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "session.plugin_timeout_secs",
        s.plugin_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "session.web_page_max_chars",
        s.web_page_max_chars,
        100,
        100_000,
    );
    validate_not_blank(errors, "session.degraded_message", &s.degraded_message);
    if let Some(prompt) = &s.system_prompt {
        validate_not_blank(errors, "session.system_prompt", prompt);
    }
}
