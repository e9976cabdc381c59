//! Configuration management
//!
//! Settings come from an optional `helpdesk.toml` in the working directory,
//! overridden by `HELPDESK__`-prefixed environment variables
//! (`HELPDESK__SERVER__PORT=9000`, `HELPDESK__STORAGE__DATA_DIR=/var/lib/...`).
//! Everything has a default so a bare `helpdesk serve` works out of the box.

use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// File-backed storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the ticket document; platform data dir when unset
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// The directory the file backend should try first
    #[must_use]
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        ProjectDirs::from("", "", "helpdesk")
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}

/// Database settings for the database-backed store variant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL; the file/memory chain is used when unset
    pub url: Option<String>,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("helpdesk").required(false))
            .add_source(
                config::Environment::with_prefix("HELPDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load configuration, falling back to defaults on any error
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|error| {
            warn!(%error, "failed to load configuration, using defaults");
            Self::default()
        })
    }

    /// The `host:port` address the server binds
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
