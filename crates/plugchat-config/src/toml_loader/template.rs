//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Plugchat Configuration
# Only override what you want to change -- missing fields use defaults.

[completion]
# provider = "openai"        # openai, azure
# endpoint = "https://api.openai.com/v1"   # required for azure
# model = "gpt-35-turbo-16k" # deployment name for azure
# api_version = "2023-07-01-preview"       # azure only
# temperature = 0.0          # 0.0-2.0
# max_tokens = 1024
# api_key_env = "OPEN_AI_KEY"
# request_timeout_secs = 120 # 1-600

[rest_api]
base_url = "http://localhost:8000"
# request_timeout_secs = 30  # 1-600

# Endpoints announced to the model. Defining any replaces the built-in
# /industry catalogue.
# [[rest_api.endpoints]]
# method = "GET"             # GET, POST, PUT, DELETE
# url = "/industry?page=[page_id]"
# description = "Lists industries. The response is paginated."

[session]
# system_prompt = "You are a helpful AI assistant."
# max_tool_hops = 8          # 1-50
# completion_timeout_secs = 60
# plugin_timeout_secs = 30
# degraded_message = "something went wrong"
# tool_limit_message = "I could not finish this request."
# enable_web_page_plugin = false
# web_page_max_chars = 8000  # 100-100000

[logging]
# level = "info"             # trace, debug, info, warn, error
# file = "plugchat.log"
"##
}
