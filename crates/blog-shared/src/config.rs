//! Application configuration loaded from a key=value file and the environment.
//!
//! Lookup order per key: process environment, then config file, then the
//! built-in default. As with `dotenvy::dotenv`, the file never overrides a
//! variable that is already set.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Config file read when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = ".env";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Listener settings for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote peer settings for the CLI client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_address: String,
    pub timeout_seconds: u64,
}

/// Logging verbosity switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Attach correlation and session ids to every call log record.
    pub enable_request_id: bool,
    /// Emit JSON log lines instead of the pretty formatter.
    pub json: bool,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 50051,
            },
            client: ClientConfig {
                server_address: "127.0.0.1:50051".to_string(),
                timeout_seconds: 5,
            },
            log: LogConfig {
                enable_request_id: false,
                json: false,
            },
        }
    }
}

impl AppConfig {
    /// Load from `.env` in the working directory plus the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load from the given file plus the environment. A missing file is not
    /// an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut vars = read_file(path)?;
        vars.extend(env::vars());
        Self::from_vars(&vars)
    }

    /// Build from an already collected key/value map.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            environment: vars
                .get("ENVIRONMENT")
                .cloned()
                .unwrap_or(defaults.environment),
            server: ServerConfig {
                host: vars
                    .get("SERVER_HOST")
                    .cloned()
                    .unwrap_or(defaults.server.host),
                port: parse(vars, "SERVER_PORT", defaults.server.port)?,
            },
            client: ClientConfig {
                server_address: vars
                    .get("CLIENT_SERVER_ADDRESS")
                    .cloned()
                    .unwrap_or(defaults.client.server_address),
                timeout_seconds: parse(
                    vars,
                    "CLIENT_TIMEOUT_SECONDS",
                    defaults.client.timeout_seconds,
                )?,
            },
            log: LogConfig {
                enable_request_id: parse_bool(
                    vars,
                    "LOG_ENABLE_REQUEST_ID",
                    defaults.log.enable_request_id,
                )?,
                json: vars
                    .get("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(defaults.log.json),
            },
        })
    }
}

fn read_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let to_error = |source: dotenvy::Error| ConfigError::File {
        path: path.to_path_buf(),
        source,
    };

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => return Ok(HashMap::new()),
        Err(err) => return Err(to_error(err)),
    };

    iter.collect::<Result<HashMap<_, _>, _>>().map_err(to_error)
}

fn parse<T: FromStr>(
    vars: &HashMap<String, String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match vars.get(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key,
            value: raw.clone(),
        }),
    }
}

fn parse_bool(
    vars: &HashMap<String, String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = vars.get(key) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.clone(),
        }),
    }
}
