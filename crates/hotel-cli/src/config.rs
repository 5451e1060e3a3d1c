//! Operator configuration.
//!
//! Read from the JSON file named by `HOTEL_CONFIG` (if set). Every field is
//! optional; `HOTEL_OPERATOR_USERNAME` / `HOTEL_OPERATOR_PASSWORD` override
//! the operator credentials from the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "HOTEL_CONFIG";
pub const USERNAME_VAR: &str = "HOTEL_OPERATOR_USERNAME";
pub const PASSWORD_VAR: &str = "HOTEL_OPERATOR_PASSWORD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Skips the name prompt when set.
    pub hotel_name: Option<String>,

    /// No operator means no login gate.
    pub operator: Option<OperatorCredentials>,

    /// Unlimited when absent.
    pub max_login_attempts: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorCredentials {
    pub username: String,
    pub password: String,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File (if any) plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match getenv(CONFIG_PATH_VAR) {
            Some(path) => {
                let config = Self::from_file(Path::new(&path))?;
                log::info!("loaded configuration from {path}");
                config
            }
            None => {
                log::info!("{CONFIG_PATH_VAR} not set, using default configuration");
                Self::default()
            }
        };
        config.apply_operator_overrides(getenv(USERNAME_VAR), getenv(PASSWORD_VAR));
        Ok(config)
    }

    fn apply_operator_overrides(&mut self, username: Option<String>, password: Option<String>) {
        match (username, password) {
            (None, None) => {}
            (Some(username), Some(password)) => {
                self.operator = Some(OperatorCredentials { username, password });
            }
            (username, password) => match self.operator.as_mut() {
                Some(operator) => {
                    if let Some(username) = username {
                        operator.username = username;
                    }
                    if let Some(password) = password {
                        operator.password = password;
                    }
                }
                None => log::warn!(
                    "only one of {USERNAME_VAR} / {PASSWORD_VAR} is set and no operator is configured; ignoring"
                ),
            },
        }
    }
}

fn getenv(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
