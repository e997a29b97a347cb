// ABOUTME: Client configuration loaded from dockmate.yml.
// ABOUTME: Handles discovery, YAML parsing, and environment overrides.

mod endpoint;
mod env_value;
mod init;

pub use endpoint::Endpoint;
pub use env_value::{EnvValue, resolve_headers};
pub use init::init_config;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "dockmate.yml";
pub const CONFIG_FILENAME_ALT: &str = "dockmate.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".dockmate/config.yml";

/// Overrides `server` when set.
pub const SERVER_ENV: &str = "DOCKMATE_SERVER";
/// Overrides `timeout` when set (humantime, e.g. `10s`).
pub const TIMEOUT_ENV: &str = "DOCKMATE_TIMEOUT";

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_server")]
    pub server: Endpoint,

    /// Whole-request timeout; zero disables it.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: HashMap<String, EnvValue>,
}

fn default_server() -> Endpoint {
    Endpoint::new("127.0.0.1", 8888, "/api")
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            server: default_server(),
            timeout: default_timeout(),
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!("loading config from {}", path.display());
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`discover`](Self::discover), but falls back to defaults when no file exists.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Apply `DOCKMATE_SERVER` and `DOCKMATE_TIMEOUT` on top of file values.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(server) = env_override(SERVER_ENV)? {
            self.server = Endpoint::parse(&server)
                .map_err(|e| Error::InvalidConfig(format!("{SERVER_ENV}: {e}")))?;
        }
        if let Some(timeout) = env_override(TIMEOUT_ENV)? {
            self.timeout = humantime_serde::re::humantime::parse_duration(&timeout)
                .map_err(|e| Error::InvalidConfig(format!("{TIMEOUT_ENV}: {e}")))?;
        }
        Ok(self)
    }

    /// Replace the endpoint, e.g. from a command-line flag.
    pub fn with_server(mut self, server: &str) -> Result<Self> {
        self.server = Endpoint::parse(server).map_err(Error::InvalidConfig)?;
        Ok(self)
    }

    /// Timeout to hand to the dispatcher, `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (!self.timeout.is_zero()).then_some(self.timeout)
    }

    pub fn resolved_headers(&self) -> Result<Vec<(String, String)>> {
        resolve_headers(&self.headers)
    }
}

/// Read an override variable; unset is `None`, non-UTF-8 is a config error.
fn env_override(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(raw)) => Err(Error::InvalidConfig(format!(
            "{name} is not valid UTF-8: {}",
            raw.to_string_lossy()
        ))),
    }
}
