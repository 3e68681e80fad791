// ABOUTME: Configuration module for the pitchdeck application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::export::{self, ExportConfig};
use crate::serve::ServeConfig;
use std::env;
use std::path::PathBuf;

/// Global configuration for the application
pub struct Config {
    pub browser_path: Option<String>,
    pub default_timeout_ms: u64,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_path: env::var("BROWSER_PATH").ok(),
            default_timeout_ms: 30000, // 30 seconds
            port: 8080,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let browser_path = env::var("BROWSER_PATH").ok();
        let default_timeout_ms = env::var("DEFAULT_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30000);
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);

        Self {
            browser_path,
            default_timeout_ms,
            port,
        }
    }

    /// Get an export configuration with defaults from this config. The
    /// canvas size, oversampling and JPEG quality are fixed by contract.
    pub fn get_export_config(&self) -> ExportConfig {
        ExportConfig {
            timeout_ms: self.default_timeout_ms,
            browser_path: self.browser_path.clone(),
            ..ExportConfig::default()
        }
    }

    /// Get a serve configuration, optionally overriding the port
    pub fn get_serve_config(&self, port: Option<u16>) -> ServeConfig {
        ServeConfig {
            port: port.unwrap_or(self.port),
            export: self.get_export_config(),
            export_output: PathBuf::from(export::EXPORT_FILE_NAME),
        }
    }
}
