//! Turns the loaded configuration into a ready session store.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use plugchat_ai::{
    ApiEndpoint, CompletionGateway, Flavor, OpenAiClient, OpenAiConfig, PluginRegistry,
    RestApiPlugin, Session, SessionSettings, SessionStore, WebPagePlugin,
};
use plugchat_common::{ConfigError, PlugchatError};
use plugchat_config::{CompletionConfig, PlugchatConfig, Provider};
use tracing::{info, warn};

/// Read the config file, layer the environment and `--base-url` on top,
/// then validate the merged result once.
///
/// `env` looks up a variable by name; the binary passes `std::env::var`.
pub fn prepare_config(
    path: Option<&Path>,
    base_url: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PlugchatConfig, ConfigError> {
    let mut config = plugchat_config::load_config(path)?;
    apply_env_overrides(&mut config.completion, env)?;
    if let Some(base_url) = base_url {
        config.rest_api.base_url = base_url;
    }
    plugchat_config::validation::validate(&config)?;
    Ok(config)
}

/// Let `OPEN_AI_TYPE` and `OPEN_AI_ENDPOINT` override the `[completion]` section.
pub fn apply_env_overrides(
    completion: &mut CompletionConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    if let Some(kind) = env("OPEN_AI_TYPE") {
        completion.provider = match Flavor::parse(&kind) {
            Some(Flavor::OpenAi) => Provider::OpenAi,
            Some(Flavor::Azure) => Provider::Azure,
            None => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown OPEN_AI_TYPE: {kind}"
                )))
            }
        };
    }
    if let Some(endpoint) = env("OPEN_AI_ENDPOINT") {
        completion.endpoint = Some(endpoint);
    }
    Ok(())
}

pub fn completion_client(config: &CompletionConfig) -> Result<OpenAiClient, PlugchatError> {
    let flavor = match config.provider {
        Provider::OpenAi => Flavor::OpenAi,
        Provider::Azure => Flavor::Azure,
    };

    let mut openai = OpenAiConfig::new(config.api_key()?, flavor)
        .with_model(&config.model)
        .with_api_version(&config.api_version)
        .with_temperature(config.temperature)
        .with_timeout(Duration::from_secs(config.request_timeout_secs));
    if let Some(endpoint) = &config.endpoint {
        openai = openai.with_endpoint(endpoint);
    }
    if let Some(max_tokens) = config.max_tokens {
        openai = openai.with_max_tokens(max_tokens);
    }

    info!(flavor = ?flavor, model = %config.model, "completion client configured");
    OpenAiClient::new(openai).map_err(|e| PlugchatError::Ai(e.to_string()))
}

pub fn plugin_registry(config: &PlugchatConfig) -> Result<PluginRegistry, PlugchatError> {
    let rest = plugchat_ai::RestApiConfig::new(&config.rest_api.base_url)
        .with_timeout(Duration::from_secs(config.rest_api.request_timeout_secs));
    let rest = RestApiPlugin::new(rest).map_err(|e| PlugchatError::Network(e.to_string()))?;

    let mut registry = PluginRegistry::new().with(Arc::new(rest));

    if config.session.enable_web_page_plugin {
        let web = WebPagePlugin::new(
            Duration::from_secs(config.rest_api.request_timeout_secs),
            config.session.web_page_max_chars,
        )
        .map_err(|e| PlugchatError::Network(e.to_string()))?;
        registry.register(Arc::new(web));
    }

    info!(plugins = ?registry.names(), "plugin registry ready");
    Ok(registry)
}

pub fn session_settings(config: &PlugchatConfig) -> SessionSettings {
    let session = &config.session;
    let apis = config
        .rest_api
        .endpoints
        .iter()
        .map(|e| ApiEndpoint {
            method: e.method.clone(),
            url: e.url.clone(),
            description: e.description.clone(),
        })
        .collect();

    let mut settings = SessionSettings::default()
        .with_apis(apis)
        .with_max_tool_hops(session.max_tool_hops)
        .with_completion_timeout(Duration::from_secs(session.completion_timeout_secs))
        .with_plugin_timeout(Duration::from_secs(session.plugin_timeout_secs))
        .with_degraded_message(&session.degraded_message);
    if let Some(prompt) = &session.system_prompt {
        settings = settings.with_system_prompt(prompt);
    }
    if let Some(message) = &session.tool_limit_message {
        settings = settings.with_tool_limit_message(message);
    }
    if settings.apis.is_empty() {
        warn!("no REST endpoints configured; the model will not know what to call");
    }
    settings
}

/// Build a store whose sessions share one gateway and plugin set.
pub fn session_store(
    gateway: Arc<dyn CompletionGateway>,
    registry: PluginRegistry,
    settings: SessionSettings,
) -> SessionStore {
    SessionStore::new(move || {
        Session::new(Arc::clone(&gateway), registry.clone(), settings.clone())
    })
}
