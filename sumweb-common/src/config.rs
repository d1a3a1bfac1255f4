//! Bootstrap configuration loading and config file resolution
//!
//! Configuration is read once at startup and cannot change while the server
//! is running. A missing config file is never fatal: the server continues
//! with compiled defaults.
//!
//! # Config file priority
//!
//! 1. Command-line argument (`--config`)
//! 2. Environment variable (`SUMWEB_CONFIG`)
//! 3. User config file (`~/.config/sumweb/config.toml`)
//! 4. System config file (`/etc/sumweb/config.toml`, Linux only)
//! 5. Compiled defaults

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SUMWEB_CONFIG";

/// Default summarization model endpoint (Hugging Face inference API)
pub const DEFAULT_SUMMARIZER_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Bootstrap configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Interface to bind the HTTP server to
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Directory holding uploaded documents (created if absent)
    pub upload_folder: PathBuf,

    /// Summarization history file served by `/download` (read-only)
    pub history_file: PathBuf,

    /// Summarization model settings
    pub summarizer: SummarizerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            upload_folder: PathBuf::from("uploads"),
            history_file: PathBuf::from("summarization_history.txt"),
            summarizer: SummarizerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Summarization model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Inference endpoint accepting `{"inputs": ..., "parameters": ...}`
    pub endpoint: String,

    /// Bearer token sent to the endpoint (optional)
    pub api_token: Option<String>,

    /// Minimum generated summary length, in model tokens
    pub min_length: u32,

    /// Maximum generated summary length, in model tokens
    pub max_length: u32,

    /// Request timeout in seconds. `None` waits for the model indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUMMARIZER_ENDPOINT.to_string(),
            api_token: None,
            min_length: 30,
            max_length: 150,
            timeout_secs: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl TomlConfig {
    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.summarizer.endpoint.trim().is_empty() {
            return Err(Error::Config("summarizer.endpoint must not be empty".to_string()));
        }
        if self.summarizer.max_length == 0 {
            return Err(Error::Config("summarizer.max_length must be positive".to_string()));
        }
        if self.summarizer.min_length > self.summarizer.max_length {
            return Err(Error::Config(format!(
                "summarizer.min_length ({}) exceeds summarizer.max_length ({})",
                self.summarizer.min_length, self.summarizer.max_length
            )));
        }
        Ok(())
    }
}

/// Parse a TOML config file
///
/// Fields absent from the file take their compiled defaults.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;
    config.validate()?;
    Ok(config)
}

/// Resolves which config file to use and loads it
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    cli_path: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(cli_path: Option<PathBuf>) -> Self {
        Self { cli_path }
    }

    /// Locate the config file following the priority order
    ///
    /// Explicit paths (CLI, environment) are returned even if they do not
    /// exist so the caller can warn about them. Default locations are only
    /// returned when present on disk.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        // Priority 1: Command-line argument
        if let Some(path) = &self.cli_path {
            return Some(path.clone());
        }

        // Priority 2: Environment variable
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        // Priority 3/4: Platform config locations
        default_config_paths().into_iter().find(|p| p.exists())
    }

    /// Load configuration, degrading to defaults when no file is available
    ///
    /// A file that exists but cannot be parsed is an error. Nothing is
    /// logged here; callers report the file via [`ConfigResolver::resolve_path`].
    pub fn load(&self) -> Result<TomlConfig> {
        match self.resolve_path() {
            Some(path) if path.exists() => load_toml_config(&path),
            _ => Ok(TomlConfig::default()),
        }
    }
}

/// Platform config file candidates, highest priority first
fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("sumweb").join("config.toml"));
    }

    if cfg!(target_os = "linux") {
        paths.push(PathBuf::from("/etc/sumweb/config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generation_bounds() {
        let config = TomlConfig::default();
        assert_eq!(config.summarizer.min_length, 30);
        assert_eq!(config.summarizer.max_length, 150);
        assert!(config.summarizer.timeout_secs.is_none());
        assert_eq!(config.upload_folder, PathBuf::from("uploads"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: TomlConfig = toml::from_str("port = 8080\n[summarizer]\nmax_length = 200\n").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.summarizer.max_length, 200);
        assert_eq!(config.summarizer.min_length, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = TomlConfig::default();
        config.summarizer.min_length = 200;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
