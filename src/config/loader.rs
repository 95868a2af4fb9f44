// file: src/config/loader.rs
// version: 1.0.0
// guid: d93a6e05-2b71-4f8c-a4d0-7c5e1b8f3a26

//! Configuration file loading and environment variable substitution

use super::ClientConfig;
use crate::error::{Result, TcatError};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load and validate a client configuration from a TOML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ClientConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            TcatError::config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let config: ClientConfig = toml::from_str(&expanded)?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else defaults
    pub fn load_or_default(&self, path: Option<&Path>) -> Result<ClientConfig> {
        if let Some(path) = path {
            return self.load(path);
        }

        match ClientConfig::default_path() {
            Some(default_path) if default_path.is_file() => self.load(default_path),
            _ => Ok(ClientConfig::default()),
        }
    }

    /// Expand `${VAR}` placeholders in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| TcatError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|v| v == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(TcatError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_var_expansion() {
        let mut loader = ConfigLoader::new();
        loader.set_env_var("TCAT_TEST_PORT".to_string(), "10001".to_string());

        let result = loader
            .expand_env_vars("address = \"127.0.0.1:${TCAT_TEST_PORT}\"")
            .unwrap();
        assert_eq!(result, "address = \"127.0.0.1:10001\"");
    }

    #[test]
    fn test_missing_env_var() {
        let loader = ConfigLoader::new();
        let result = loader.expand_env_vars("a = \"${TCAT_MISSING_VAR}\"\nb = \"${TCAT_MISSING_VAR}\"");

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Missing environment variables"));
        assert_eq!(err.matches("TCAT_MISSING_VAR").count(), 1);
    }

    #[test]
    fn test_load_config_file() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[device]
address = "${{TCAT_TEST_HOST}}:10001"
response_timeout_ms = 1500

[logging]
format = "json"
"#
        )
        .unwrap();

        let mut loader = ConfigLoader::new();
        loader.set_env_var("TCAT_TEST_HOST".to_string(), "localhost".to_string());
        let config = loader.load(file.path())?;

        assert_eq!(config.device.address.as_deref(), Some("localhost:10001"));
        assert_eq!(config.device.response_timeout_ms, 1500);
        assert_eq!(config.device.connect_timeout_ms, 5_000);
        assert_eq!(config.logging.format, LogFormat::Json);

        Ok(())
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[device]\nresponse_timeout_ms = 0").unwrap();

        let loader = ConfigLoader::new();
        assert!(matches!(loader.load(file.path()), Err(TcatError::Config(_))));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[device\naddress = ").unwrap();

        let loader = ConfigLoader::new();
        assert!(matches!(loader.load(file.path()), Err(TcatError::Toml(_))));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let loader = ConfigLoader::new();
        let result = loader.load_or_default(Some(Path::new("/nonexistent/tcat.toml")));
        assert!(matches!(result, Err(TcatError::Config(_))));
    }
}
