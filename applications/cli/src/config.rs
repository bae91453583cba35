//! Client configuration loaded from the user's config file.

use jellycli_client::ServerConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Shape shown to the user when the config file is missing or malformed.
const EXAMPLE_CONFIG: &str =
    r#"{"Host": "http://your-server:8096", "UserId": "your-user-id", "AuthKey": "your-api-key"}"#;

/// File name under `~/.config`.
const CONFIG_FILE: &str = "jellycli.conf";

/// Errors raised while loading the config file. All of these are fatal to
/// the CLI.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist
    #[error(
        "config file not found: {0:?}\nPlease create a config file with the following format:\n{example}",
        example = EXAMPLE_CONFIG
    )]
    Missing(PathBuf),

    /// Config file exists but could not be read
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON or lacks a required key
    #[error(
        "failed to parse config file {path:?}: {source}\nExpected format:\n{example}",
        example = EXAMPLE_CONFIG
    )]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw contents of the config file. Keys are PascalCase by contract.
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    #[serde(rename = "Host")]
    pub host: String,

    #[serde(rename = "UserId")]
    pub user_id: String,

    #[serde(rename = "AuthKey")]
    pub auth_key: String,
}

impl FileConfig {
    /// Convert into the client's connection config.
    pub fn into_server_config(self) -> ServerConfig {
        ServerConfig::new(self.host, self.user_id, self.auth_key)
    }
}

/// Default per-user config path: `~/.config/jellycli.conf`.
pub fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join(CONFIG_FILE)
}

/// Load and parse the config file at `path`.
pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Missing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
