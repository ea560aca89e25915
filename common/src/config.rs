use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::yaml_include::render_yaml_with_includes;

/// Environment variable that overrides `common.database_url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Scan(#[from] yaml_rust2::ScanError),

    #[error("Failed to render merged YAML: {0}")]
    Emit(#[from] yaml_rust2::EmitError),

    #[error("Config does not match the expected shape: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error("Empty !include directive in {path}")]
    EmptyInclude { path: PathBuf },

    #[error("Config include cycle through {path}")]
    IncludeCycle { path: PathBuf },
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
    pub database_url: String,
}

/// Connection pool settings for the order store.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout_secs() -> u64 {
    8
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchemaToolConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SchemaToolConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub schema_tool: SchemaToolConfig,
}

impl Config {
    /// Load a config file, resolving `!include` lines relative to it.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        let rendered = render_yaml_with_includes(config_path)?;
        debug!(path = %config_path.display(), "Loaded merged config");
        Self::from_yaml_str(&rendered)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(contents)?)
    }

    /// Apply `DATABASE_URL` from the process environment, if set.
    pub fn with_env_overrides(self) -> Self {
        self.with_database_url(std::env::var(DATABASE_URL_ENV).ok())
    }

    pub fn with_database_url(mut self, database_url: Option<String>) -> Self {
        if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
            self.common.database_url = url;
        }
        self
    }
}
