//! Name-keyed plugin registry scoped to one session.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, warn};

use crate::PluginDescriptor;

use super::Plugin;

/// Function names accepted by OpenAI-compatible services.
static PLUGIN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{1,64}$").unwrap());

/// Plugins in registration order, with a name index for lookups.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn Plugin>>,
    index: HashMap<String, usize>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a plugin. A later plugin with the same name replaces the
    /// earlier one in place.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        let name = plugin.name().to_string();
        if !PLUGIN_NAME_RE.is_match(&name) {
            warn!(plugin = %name, "plugin name is not identifier-safe");
        }

        match self.index.get(&name) {
            Some(&slot) => {
                debug!(plugin = %name, "replacing registered plugin");
                self.plugins[slot] = plugin;
            }
            None => {
                debug!(plugin = %name, "registering plugin");
                self.index.insert(name, self.plugins.len());
                self.plugins.push(plugin);
            }
        }
    }

    pub fn with(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.register(plugin);
        self
    }

    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.index.get(name).map(|&slot| Arc::clone(&self.plugins[slot]))
    }

    pub fn describe_all(&self) -> Vec<PluginDescriptor> {
        self.plugins.iter().map(|p| p.descriptor()).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::PluginError;
    use async_trait::async_trait;
    use serde_json::{json, Map, Value};

    struct Fixed {
        name: &'static str,
        output: &'static str,
    }

    #[async_trait]
    impl Plugin for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "Returns a fixed value"
        }

        fn parameters(&self) -> Value {
            json!({ "type": "object", "properties": {} })
        }

        async fn execute(&self, _arguments: Map<String, Value>) -> Result<Value, PluginError> {
            Ok(json!(self.output))
        }
    }

    fn fixed(name: &'static str, output: &'static str) -> Arc<dyn Plugin> {
        Arc::new(Fixed { name, output })
    }

    #[test]
    fn resolve_registered_plugin() {
        let registry = PluginRegistry::new().with(fixed("call_rest_api", "a"));
        assert!(registry.resolve("call_rest_api").is_some());
        assert!(registry.resolve("delete_industry").is_none());
    }

    #[tokio::test]
    async fn last_registration_wins() {
        let registry = PluginRegistry::new()
            .with(fixed("lookup", "first"))
            .with(fixed("other", "x"))
            .with(fixed("lookup", "second"));

        assert_eq!(registry.len(), 2);
        let plugin = registry.resolve("lookup").unwrap();
        assert_eq!(plugin.execute(Map::new()).await.unwrap(), json!("second"));
        // Replacement keeps the original slot.
        assert_eq!(registry.names(), vec!["lookup", "other"]);
    }

    #[test]
    fn describe_all_follows_registration_order() {
        let registry = PluginRegistry::new()
            .with(fixed("zeta", ""))
            .with(fixed("alpha", ""));

        let names: Vec<String> = registry
            .describe_all()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn empty_registry() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.describe_all().is_empty());
    }

    #[test]
    fn name_pattern() {
        assert!(PLUGIN_NAME_RE.is_match("call_rest_api"));
        assert!(PLUGIN_NAME_RE.is_match("fetch-web-page"));
        assert!(!PLUGIN_NAME_RE.is_match("call rest api"));
        assert!(!PLUGIN_NAME_RE.is_match(""));
    }
}
