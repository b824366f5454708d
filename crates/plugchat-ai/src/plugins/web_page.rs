//! `fetch_web_page`: downloads a page and hands its visible text to the model.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use serde_json::{json, Map, Value};
use tracing::debug;

use super::{http_client, required_str, Plugin, PluginError};

/// Elements whose text never reaches the reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

pub struct WebPagePlugin {
    http: reqwest::Client,
    max_chars: usize,
}

impl WebPagePlugin {
    pub fn new(timeout: Duration, max_chars: usize) -> Result<Self, PluginError> {
        Ok(Self {
            http: http_client(timeout)?,
            max_chars,
        })
    }
}

/// Extract the readable text of an HTML document, one text run per line.
pub(crate) fn visible_text(document: &str) -> String {
    let html = Html::parse_document(document);
    let root = Selector::parse("body")
        .ok()
        .and_then(|body| html.select(&body).next())
        .unwrap_or_else(|| html.root_element());

    let mut lines = Vec::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        let trimmed = text.trim();
        if !hidden && !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    lines.join("\n")
}

#[async_trait]
impl Plugin for WebPagePlugin {
    fn name(&self) -> &str {
        "fetch_web_page"
    }

    fn description(&self) -> &str {
        "Downloads a web page and returns its visible text content"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Absolute http(s) URL of the page to read"
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(&self, arguments: Map<String, Value>) -> Result<Value, PluginError> {
        let url = required_str(&arguments, "url")?;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(PluginError::InvalidArguments(format!(
                "url must be absolute http(s): {url}"
            )));
        }

        debug!(%url, "fetching web page");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PluginError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(json!({
                "error": format!("Request failed with status code {}", status.as_u16()),
                "status_code": status.as_u16(),
            }));
        }

        let document = response
            .text()
            .await
            .map_err(|e| PluginError::Http(e.to_string()))?;

        let content: String = visible_text(&document).chars().take(self.max_chars).collect();
        Ok(json!({ "content": content }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE: &str = r#"<html>
<head><title>Ignored title</title><style>body { color: red; }</style></head>
<body>
  <h1>Industries</h1>
  <script>var tracking = true;</script>
  <p>Mining and <b>Fishing</b></p>
</body>
</html>"#;

    #[test]
    fn visible_text_drops_scripts_and_styles() {
        let text = visible_text(PAGE);
        assert!(text.contains("Industries"));
        assert!(text.contains("Fishing"));
        assert!(!text.contains("tracking"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("Ignored title"));
    }

    #[tokio::test]
    async fn fetches_and_truncates_page_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let plugin = WebPagePlugin::new(Duration::from_secs(5), 10).unwrap();
        let mut args = Map::new();
        args.insert("url".into(), json!(format!("{}/page", server.uri())));

        let result = plugin.execute(args).await.unwrap();
        assert_eq!(result["content"], "Industries");
    }

    #[tokio::test]
    async fn relative_url_is_rejected() {
        let plugin = WebPagePlugin::new(Duration::from_secs(5), 100).unwrap();
        let mut args = Map::new();
        args.insert("url".into(), json!("/page"));

        let err = plugin.execute(args).await.unwrap_err();
        assert!(matches!(err, PluginError::InvalidArguments(_)));
    }
}
