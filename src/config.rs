//! Configuration manager for the account service.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_LOG_LEVEL: &str = "info";
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Instance name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Default filter directive for logs, overridden by `RUST_LOG`.
    pub log_level: Option<String>,
    /// Related to PostgreSQL configuration.
    /// Accounts are kept in memory when missing.
    #[serde(skip_serializing)]
    pub postgres: Option<Postgres>,
}

/// PostgreSQL configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Postgres {
    /// Hostname:(?port) for PostgreSQL instance.
    pub address: String,
    /// Database name.
    pub database: Option<String>,
    /// Username credential to connect.
    pub username: Option<String>,
    /// Password credential to connect.
    pub password: Option<String>,
    /// Maximum pool connections.
    pub pool_size: Option<u32>,
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Running crate version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Log filter directive, `info` if unset.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// Falls back to the default configuration if the file is missing or
    /// malformed.
    pub fn read(self) -> Arc<Self> {
        let file_path = if self.path.is_file() {
            self.path.clone()
        } else {
            Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        let file = match File::open(&file_path) {
            Ok(file) => file,
            Err(err) => return Arc::new(self.error(err)),
        };

        match serde_yaml::from_reader::<_, Configuration>(file) {
            Ok(mut config) => {
                config.version = VERSION.to_owned();
                config.path = file_path;
                Arc::new(config)
            },
            Err(err) => Arc::new(self.error(err)),
        }
    }

    /// Return a default configuration as fallback.
    fn error(&self, err: impl std::error::Error) -> Self {
        tracing::error!(error = %err, "cannot read `config.yaml` file");
        Self {
            version: VERSION.to_owned(),
            ..Default::default()
        }
    }
}
