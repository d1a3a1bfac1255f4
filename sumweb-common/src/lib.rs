//! # sumweb Common Library
//!
//! Shared code for the sumweb services including:
//! - Common error type
//! - Bootstrap configuration (TOML) and config file resolution

pub mod config;
pub mod error;

pub use config::{ConfigResolver, LoggingConfig, SummarizerConfig, TomlConfig};
pub use error::{Error, Result};
