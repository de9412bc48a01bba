//! Configuration for the storefront CMS connection.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (STOREFRONT_CMS_URL, STOREFRONT_CMS_TIMEOUT)
//! 2. Config file (.storefront/config.yaml)
//! 3. Defaults (http://localhost:1337, 30s)
//!
//! Config file discovery:
//! - Searches current directory and parents for .storefront/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable overriding the CMS base URL
pub const ENV_CMS_URL: &str = "STOREFRONT_CMS_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_CMS_TIMEOUT: &str = "STOREFRONT_CMS_TIMEOUT";

pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub cms: CmsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CmsConfig {
    /// CMS base URL
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// CMS connection settings
    pub cms: CmsSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for CmsSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CMS_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl CmsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Find config file by searching a directory and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".storefront").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merge env overrides, file values and defaults
fn resolve_settings(
    file: Option<&ConfigFile>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<CmsSettings> {
    let defaults = CmsSettings::default();
    let cms = file.map(|f| &f.cms);

    let base_url = env(ENV_CMS_URL)
        .or_else(|| cms.and_then(|c| c.base_url.clone()))
        .unwrap_or(defaults.base_url);

    let timeout_seconds = match env(ENV_CMS_TIMEOUT) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {}: {}", ENV_CMS_TIMEOUT, raw))?,
        None => cms
            .and_then(|c| c.timeout_seconds)
            .unwrap_or(defaults.timeout_seconds),
    };

    Ok(CmsSettings {
        base_url,
        timeout_seconds,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config_file = find_config_file(&cwd);

    let file = match config_file {
        Some(ref path) => Some(load_config_file(path)?),
        None => None,
    };

    let cms = resolve_settings(file.as_ref(), |key| std::env::var(key).ok())?;

    Ok(ResolvedConfig { cms, config_file })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
