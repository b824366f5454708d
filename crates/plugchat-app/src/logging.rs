//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use plugchat_common::PlugchatError;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` directives are honoured on top of `level`. With `file` set,
/// output is appended there without ANSI colours instead of going to stderr.
pub fn init(level: &str, file: Option<&Path>) -> Result<(), PlugchatError> {
    let filter = build_filter(level)?;

    let result = match file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    PlugchatError::Logging(format!("failed to open {}: {e}", path.display()))
                })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| PlugchatError::Logging(e.to_string()))
}

fn build_filter(level: &str) -> Result<EnvFilter, PlugchatError> {
    let directive = level
        .parse()
        .map_err(|e| PlugchatError::Logging(format!("invalid log level '{level}': {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_targets() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("plugchat_ai=trace").is_ok());
    }

    #[test]
    fn rejects_garbage_level() {
        let err = build_filter("very=loud=please").unwrap_err();
        assert!(matches!(err, PlugchatError::Logging(_)));
    }
}
