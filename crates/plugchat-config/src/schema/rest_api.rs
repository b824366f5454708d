//! REST API plugin configuration and the endpoint catalogue.

use serde::{Deserialize, Serialize};

/// One endpoint announced to the model in the conversation preamble.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointConfig {
    pub method: String,
    /// Path relative to `base_url`; `[placeholders]` are filled by the model.
    pub url: String,
    pub description: String,
}

impl EndpointConfig {
    fn new(method: &str, url: &str, description: &str) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// `[rest_api]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestApiConfig {
    pub base_url: String,
    /// Per-request HTTP timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u64,
    pub endpoints: Vec<EndpointConfig>,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            request_timeout_secs: 30,
            endpoints: default_endpoints(),
        }
    }
}

fn default_endpoints() -> Vec<EndpointConfig> {
    vec![
        EndpointConfig::new(
            "GET",
            "/industry?page=[page_id]",
            "Lists industries. The response is paginated. You may need to request more than \
             one to get them all. For example,/industry?page=2.",
        ),
        EndpointConfig::new(
            "GET",
            "/industry/[industry_id]",
            "Returns information about the industry identified by the given id. For \
             example,/industry/2",
        ),
        EndpointConfig::new(
            "POST",
            "/industry",
            "Creates a new industry. This function accepts JSON body containing four fields: \
             id,name,created,modified",
        ),
        EndpointConfig::new(
            "PUT",
            "/industry/[industry_id]",
            "Updates industry information. This function accepts JSON body containing one \
             fields: name. The industry_id in the URL must be a valid identifier of an \
             existing industry.",
        ),
        EndpointConfig::new(
            "DELETE",
            "/industry/[industry_id]",
            "Removes the industry identified by the given id. Before you call this function, \
             find the industry information and make sure the id is correct. Do NOT call this \
             function if you didn't retrieve user info. Iterate over all pages until you find \
             it or make sure it doesn't exist",
        ),
    ]
}
