//! Configuration
//!
//! The only thing Hoot needs from the outside world is the completion
//! endpoint. Sources, lowest precedence first: `config.toml` in the user
//! config dir, then environment variables, then CLI flags (applied by the
//! binary). Missing file means defaults; a file that exists but does not
//! parse is an error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the endpoint URL
pub const CHAT_URL_ENV: &str = "HOOT_CHAT_URL";
/// Environment variable overriding the API key
pub const CHAT_API_KEY_ENV: &str = "HOOT_CHAT_API_KEY";

const CONFIG_FILE: &str = "config.toml";

fn default_timeout() -> u64 {
    30
}

/// Settings for the completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Completion endpoint URL; required before the first request
    pub endpoint: Option<String>,
    /// Bearer token sent with each request
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            request_timeout_secs: default_timeout(),
        }
    }
}

impl ChatConfig {
    /// Load from the user config dir and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path)?,
            _ => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a specific config file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hoot").join(CONFIG_FILE))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(CHAT_URL_ENV) {
            self.endpoint = Some(url);
        }
        if let Ok(key) = std::env::var(CHAT_API_KEY_ENV) {
            self.api_key = Some(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint = \"https://hub.example/api/chat\"\nrequest_timeout_secs = 5"
        )
        .unwrap();

        let config = ChatConfig::load_from_path(file.path()).unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://hub.example/api/chat")
        );
        assert!(config.api_key.is_none());
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = [not toml").unwrap();
        assert!(ChatConfig::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ChatConfig::load_from_path(&dir.path().join("nope.toml")).is_err());
    }
}
