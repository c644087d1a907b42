// src/config.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::errors::ServerError;

pub const DEFAULT_CONFIG_PATH: &str = "remediuse.toml";
pub const CONFIG_PATH_ENV: &str = "REMEDIUSE_CONFIG";
pub const BIND_ENV: &str = "REMEDIUSE_BIND";

/// Top-level application configuration, read from `remediuse.toml`.
///
/// Every section falls back to its defaults, so an empty file (or no file at
/// all) yields a runnable development setup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    /// Upper bound on request bodies; image data URLs travel in form posts.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
    /// Keep the session in process memory instead of SQLite.
    #[serde(default)]
    pub in_memory: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated round-trip to the identity provider.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional JSON seed replacing the bundled sample catalog.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            max_workers: default_max_workers(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            in_memory: false,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_workers() -> usize {
    8
}

fn default_max_body_bytes() -> usize {
    8 * 1024 * 1024
}

fn default_storage_path() -> String {
    "remediuse.sqlite3".to_string()
}

fn default_login_delay_ms() -> u64 {
    500
}

fn default_submit_delay_ms() -> u64 {
    2000
}

fn default_max_image_bytes() -> usize {
    2 * 1024 * 1024
}

fn default_log_filter() -> String {
    "remediuse=info".to_string()
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ServerError> {
        toml::from_str(content)
            .map_err(|e| ServerError::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Load from `path`. A missing file is not an error: defaults are used.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ServerError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Resolve the config path from the environment, load it and apply
    /// environment overrides.
    pub fn from_env() -> Result<Self, ServerError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut cfg = Self::load(&path)?;
        if let Ok(bind) = std::env::var(BIND_ENV) {
            cfg.server.bind_addr = bind;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        if self.server.max_workers == 0 {
            return Err(ServerError::ConfigError(
                "server.max_workers must be at least 1".into(),
            ));
        }
        if self.forms.max_image_bytes > self.server.max_body_bytes {
            warn!(
                max_image_bytes = self.forms.max_image_bytes,
                max_body_bytes = self.server.max_body_bytes,
                "image limit exceeds body limit; large images will be truncated"
            );
        }
        Ok(())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.auth.login_delay_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.forms.submit_delay_ms)
    }
}
