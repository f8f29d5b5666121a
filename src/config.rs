use std::env;

use thiserror::Error;

use crate::mcp::server::ServerInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_name: String,
    pub server_version: String,
    pub register_defaults: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MCP_SERVER_NAME must not be empty")]
    EmptyServerName,
    #[error("MCP_SERVER_VERSION must not be empty")]
    EmptyServerVersion,
    #[error("{0} must be true or false")]
    InvalidBool(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server_name = non_empty(
            lookup("MCP_SERVER_NAME"),
            env!("CARGO_PKG_NAME"),
            ConfigError::EmptyServerName,
        )?;
        let server_version = non_empty(
            lookup("MCP_SERVER_VERSION"),
            env!("CARGO_PKG_VERSION"),
            ConfigError::EmptyServerVersion,
        )?;
        let register_defaults = match lookup("MCP_REGISTER_DEFAULTS")
            .map(|value| value.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("true") => true,
            Some("false") => false,
            Some(_) => return Err(ConfigError::InvalidBool("MCP_REGISTER_DEFAULTS")),
        };

        Ok(Self {
            server_name,
            server_version,
            register_defaults,
        })
    }

    pub fn server_info(&self) -> ServerInfo {
        ServerInfo::new(self.server_name.clone(), self.server_version.clone())
    }
}

fn non_empty(
    value: Option<String>,
    default: &str,
    error: ConfigError,
) -> Result<String, ConfigError> {
    match value {
        None => Ok(default.to_string()),
        Some(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err(error)
            } else {
                Ok(trimmed.to_string())
            }
        }
    }
}
