//! Layered configuration: built-in defaults, an optional TOML file, then
//! `MURAKAMI_*` environment variables.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::error::{FeedError, FeedResult};
use crate::pricing::PricingRules;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MURAKAMI_CONFIG";

static DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; VillaMurakami/1.0)";

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4096
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MurakamiConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub pricing: PricingRules,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the booking calendar comes from. Exactly one of `url` or `path`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Provider iCal export, including its access token
    pub url: Option<Url>,
    /// Local .ics file, `~` is expanded
    pub path: Option<PathBuf>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            url: None,
            path: None,
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on one feed fetch; 0 waits indefinitely
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Serve the fixed fallback data when the feed cannot be fetched
    #[serde(default)]
    pub fallback_to_mock: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            fallback_to_mock: false,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl MurakamiConfig {
    /// `$MURAKAMI_CONFIG`, or ~/.config/murakami/config.toml
    pub fn config_path() -> FeedResult<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| FeedError::Config("Could not determine config directory".into()))?
            .join("murakami");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> FeedResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path` (which may be absent) with environment overrides on top.
    pub fn load_from(path: &Path) -> FeedResult<Self> {
        let config: MurakamiConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("MURAKAMI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}
