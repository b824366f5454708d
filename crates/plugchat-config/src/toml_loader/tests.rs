use super::source::seed;
use super::*;
use plugchat_common::ConfigError;
use std::path::Path;

fn explicit(path: &Path) -> ConfigSource {
    ConfigSource::resolve(Some(path)).unwrap()
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = explicit(&path).load().unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
    assert!(!path.exists());
}

#[test]
fn missing_user_file_is_seeded_from_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugchat").join("config.toml");
    let source = ConfigSource::UserDefault(path.clone());

    let config = source.load().unwrap();
    assert!(path.exists());
    assert_eq!(config.rest_api.base_url, "http://localhost:8000");

    // Second run reads the seeded file instead of rewriting it.
    let reread = source.load().unwrap();
    assert_eq!(reread.rest_api.endpoints.len(), 5);
    assert!(crate::validation::validate(&reread).is_ok());
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[rest_api]
base_url = "https://api.example.com/v2"

[session]
max_tool_hops = 3
"#,
    )
    .unwrap();

    let config = explicit(&path).load().unwrap();
    assert_eq!(config.rest_api.base_url, "https://api.example.com/v2");
    assert_eq!(config.session.max_tool_hops, 3);
    assert_eq!(config.session.plugin_timeout_secs, 30);
    assert_eq!(config.completion.model, "gpt-35-turbo-16k");
}

#[test]
fn malformed_toml_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[session\nmax_tool_hops = ").unwrap();

    let err = explicit(&path).load().unwrap_err();
    assert!(matches!(&err, ConfigError::ParseError(msg) if msg.contains("broken.toml")));
}

#[test]
fn out_of_range_values_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[session]\nmax_tool_hops = 500\n").unwrap();

    let config = explicit(&path).load().unwrap();
    assert_eq!(config.session.max_tool_hops, 500);
}

#[test]
fn user_default_lives_under_plugchat_dir() {
    if let Ok(source) = ConfigSource::resolve(None) {
        assert!(matches!(source, ConfigSource::UserDefault(_)));
        assert!(source.path().ends_with("plugchat/config.toml"));
    }
}

#[test]
fn seeded_template_parses_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    seed(&path).unwrap();

    let parsed: crate::PlugchatConfig =
        toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.completion.api_key_env, "OPEN_AI_KEY");
    assert_eq!(parsed.session.max_tool_hops, 8);
}
