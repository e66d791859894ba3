//! Frontend configuration
//!
//! The default config is embedded in the bundle. A build can override it by
//! setting `APP_CONFIG` to a TOML document at compile time.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend port used when `base_url` is not set
    #[serde(default = "default_port")]
    pub port: u16,
    /// Absolute backend URL, e.g. "https://erp.example.com/api"
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    /// Auto-dismiss delay; 0 keeps notifications until closed
    pub timeout_ms: u32,
    pub max_visible: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 4000,
            max_visible: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn log_level(&self) -> log::Level {
        match self.level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[notifications]
timeout_ms = 4000
max_visible = 5

[logging]
level = "debug"
"#;

pub fn parse_config(source: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load configuration
///
/// Order:
/// 1. `APP_CONFIG` captured at build time
/// 2. Embedded default config
pub fn load_config() -> AppConfig {
    if let Some(source) = option_env!("APP_CONFIG") {
        match parse_config(source) {
            Ok(config) => return config,
            Err(e) => log::warn!("APP_CONFIG ignored: {}", e),
        }
    }

    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is broken: {}", e);
            AppConfig {
                api: ApiConfig {
                    port: default_port(),
                    base_url: None,
                },
                notifications: NotificationConfig::default(),
                logging: LoggingConfig::default(),
            }
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
