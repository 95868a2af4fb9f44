// file: src/config/mod.rs
// version: 1.0.0
// guid: 71f0c2d9-5e8a-4b36-9c14-8a2e6d3f0b57

//! Client configuration
//!
//! Loaded from TOML, then overridden by command line flags.

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::{Result, TcatError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub device: DeviceConfig,
    pub logging: LoggingConfig,
}

/// Where and how to reach the TCAT device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// `host:port` of a simulated device; no connection when unset
    pub address: Option<String>,
    /// Connection establishment limit in milliseconds
    pub connect_timeout_ms: u64,
    /// How long a request waits for its response in milliseconds
    pub response_timeout_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: None,
            connect_timeout_ms: 5_000,
            response_timeout_ms: 5_000,
        }
    }
}

impl DeviceConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl ClientConfig {
    /// `<config dir>/tcat-tlv-client/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tcat-tlv-client").join("config.toml"))
    }

    /// Apply command line overrides on top of file values
    pub fn apply_overrides(&mut self, address: Option<String>, response_timeout_ms: Option<u64>) {
        if let Some(address) = address {
            self.device.address = Some(address);
        }
        if let Some(timeout) = response_timeout_ms {
            self.device.response_timeout_ms = timeout;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(address) = &self.device.address {
            if address.trim().is_empty() {
                return Err(TcatError::config("device.address cannot be empty"));
            }
            if !address.contains(':') {
                return Err(TcatError::config(format!(
                    "device.address '{}' must be host:port",
                    address
                )));
            }
        }
        if self.device.connect_timeout_ms == 0 {
            return Err(TcatError::config("device.connect_timeout_ms must be greater than 0"));
        }
        if self.device.response_timeout_ms == 0 {
            return Err(TcatError::config("device.response_timeout_ms must be greater than 0"));
        }
        Ok(())
    }
}
