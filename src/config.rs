//! Client configuration.
//!
//! Resolution order (later sources override earlier ones):
//!
//! 1. Built-in defaults (`http://localhost:5000`, quiet, 5s/10s ceilings)
//! 2. JSON file at `$LIVEVIZ_CONFIG`, else `<config dir>/liveviz/client.json`
//! 3. Environment: `LIVEVIZ_URL`, `LIVEVIZ_VERBOSE`
//!
//! A missing file is normal; an unreadable or malformed one is logged and
//! skipped so a bad config never stops the host application.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::live::DEFAULT_BASE_URL;
use crate::transport::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "LIVEVIZ_CONFIG";

/// Environment variable overriding the service base URL.
pub const URL_ENV: &str = "LIVEVIZ_URL";

/// Environment variable enabling verbose failure diagnostics.
pub const VERBOSE_ENV: &str = "LIVEVIZ_VERBOSE";

/// Settings used to build a [`VisualizerClient`](crate::VisualizerClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base address.
    pub base_url: String,
    /// Log failures at warn level.
    pub verbose: bool,
    /// Connection-establishment ceiling.
    pub connect_timeout: Duration,
    /// Overall response ceiling.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            verbose: false,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// On-disk form of [`ClientConfig`]; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub verbose: Option<bool>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Read and parse a JSON config file.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Resolve the config file location.
///
/// `$LIVEVIZ_CONFIG` wins; otherwise the platform config directory
/// (`~/.config` on Linux, `~/Library/Application Support` on macOS).
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join("liveviz").join("client.json"))
}

impl ClientConfig {
    /// Load defaults, then the config file, then the environment.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(path) = config_file_path() {
            if path.exists() {
                match FileConfig::read(&path) {
                    Ok(file) => {
                        tracing::debug!("Using config file: {}", path.display());
                        config.apply_file(file);
                    }
                    Err(e) => tracing::warn!("Ignoring config file: {:#}", e),
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Overlay the keys present in a config file.
    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(url) = file.base_url {
            self.base_url = url;
        }
        if let Some(verbose) = file.verbose {
            self.verbose = verbose;
        }
        if let Some(secs) = file.connect_timeout_secs {
            self.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
    }

    /// Overlay environment variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(URL_ENV).filter(|url| !url.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(VERBOSE_ENV) {
            match parse_flag(&raw) {
                Some(verbose) => self.verbose = verbose,
                None => tracing::warn!("Ignoring {}={:?}: expected a boolean", VERBOSE_ENV, raw),
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
