//! Where the config comes from and how it is read.

use crate::schema::PlugchatConfig;
use plugchat_common::ConfigError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// The file a config is read from.
///
/// A file named on the command line must exist. The per-user file under the
/// OS config directory is seeded from the commented template on first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    UserDefault(PathBuf),
}

impl ConfigSource {
    /// Pick the explicit path when given, else `<config dir>/plugchat/config.toml`.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Ok(Self::Explicit(path.to_path_buf()));
        }
        let dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
        Ok(Self::UserDefault(dir.join("plugchat").join("config.toml")))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::UserDefault(path) => path,
        }
    }

    /// Read and deserialize the file. Missing fields take schema defaults;
    /// value checks are left to the caller.
    pub fn load(&self) -> Result<PlugchatConfig, ConfigError> {
        match (self, read(self.path())) {
            (Self::UserDefault(path), Err(ConfigError::FileNotFound(_))) => {
                info!("no config found at {}, writing template", path.display());
                seed(path)?;
                Ok(PlugchatConfig::default())
            }
            (_, result) => result,
        }
    }
}

fn read(path: &Path) -> Result<PlugchatConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("failed to parse {}: {e}", path.display()))
    })?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Write the commented template, creating parent directories.
pub(super) fn seed(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("failed to create {}: {e}", parent.display()))
        })?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    })
}
