//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use auro_commerce::search::SortOption;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuroConfig {
    /// Where session state is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log output.
    #[serde(default)]
    pub log: LogConfig,

    /// Shop listing defaults.
    #[serde(default)]
    pub shop: ShopConfig,
}

impl AuroConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storage backend kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// One JSON file per key under `dir`.
    #[default]
    File,
    /// Nothing survives the process.
    Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// State directory (default: `$HOME/.local/share/auro`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Browsing-context namespace; `--profile` overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default)]
    pub backend: Backend,
}

/// Log format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Shop listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Sort used when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortOption,

    /// Maximum products printed per listing.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    24
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            default_sort: SortOption::default(),
            page_size: default_page_size(),
        }
    }
}

/// Generate a default auro.toml config file.
pub fn generate_default_config() -> String {
    r#"# Auro storefront configuration

[storage]
# dir = "~/.local/share/auro"
# namespace = "guest"
backend = "file"

[log]
level = "warn"
format = "text"

[shop]
default_sort = "featured"
page_size = 24
"#
    .to_string()
}
