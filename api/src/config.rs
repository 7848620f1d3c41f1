//! Server Configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "openforms.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,
    /// Log filter used when RUST_LOG is unset
    pub log_level: String,
    /// Storage backend
    pub storage: StorageConfig,
    /// Allow any origin
    pub cors_permissive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    Memory,
    Sqlite { path: PathBuf },
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".into(),
            log_level: "info".into(),
            storage: StorageConfig::Sqlite {
                path: PathBuf::from("openforms.db"),
            },
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    /// Load from file. `Ok(None)` if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        toml::from_str(&content).map(Some).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply `OPENFORMS_BIND_ADDR` and `OPENFORMS_DATABASE`
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = var("OPENFORMS_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(db) = var("OPENFORMS_DATABASE") {
            self.storage = if db == ":memory:" {
                StorageConfig::Memory
            } else {
                StorageConfig::Sqlite { path: db.into() }
            };
        }
    }
}
