use std::env;
use std::str::FromStr;

use thiserror::Error;
use tracing::Level;

use crate::product_actor::IdPolicy;

const BIND_ADDRESS_VAR: &str = "PRODUCT_REGISTRY_BIND_ADDRESS";
const PORT_VAR: &str = "PRODUCT_REGISTRY_PORT";
const ID_POLICY_VAR: &str = "PRODUCT_REGISTRY_ID_POLICY";
const MAILBOX_SIZE_VAR: &str = "PRODUCT_REGISTRY_MAILBOX_SIZE";
const LOG_LEVEL_VAR: &str = "PRODUCT_REGISTRY_LOG_LEVEL";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegistryConfig {
    pub id_policy: IdPolicy,
    pub mailbox_size: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::AutoAssign,
            mailbox_size: 32,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl ServerConfig {
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from defaults plus whatever `lookup` returns for each
    /// `PRODUCT_REGISTRY_*` key. Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(value) = read(BIND_ADDRESS_VAR) {
            config.server.bind_address = value;
        }
        if let Some(value) = read(PORT_VAR) {
            config.server.port = parse_value(PORT_VAR, &value)?;
        }
        if let Some(value) = read(ID_POLICY_VAR) {
            config.registry.id_policy = parse_value(ID_POLICY_VAR, &value)?;
        }
        if let Some(value) = read(MAILBOX_SIZE_VAR) {
            config.registry.mailbox_size = parse_value(MAILBOX_SIZE_VAR, &value)?;
        }
        if let Some(value) = read(LOG_LEVEL_VAR) {
            let level: Level = parse_value(LOG_LEVEL_VAR, &value)?;
            config.logging.level = level.as_str().to_ascii_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // tokio's mpsc::channel panics on a zero capacity
        if self.registry.mailbox_size == 0 {
            return Err(ConfigError::Validation(
                "registry.mailbox_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_value<V: FromStr>(key: &str, value: &str) -> Result<V, ConfigError> {
    value.parse::<V>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}
