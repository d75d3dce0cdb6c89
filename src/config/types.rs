use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::profile::phone::DEFAULT_COUNTRY;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote profile API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host + port of the API (default: "http://localhost:4500").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the create endpoint (default: "/api/v1/profiles/create").
    #[serde(default = "default_create_path")]
    pub create_path: String,
    /// Total request timeout in seconds. Unset means transport defaults.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Honour HTTP(S)_PROXY / NO_PROXY from the environment (default: true).
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Country preselected in the phone input (default: "cm").
    #[serde(default = "default_country")]
    pub default_country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays on screen (default: 5000).
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<data_dir>/profile-form/profile-form.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:4500".to_string()
}

fn default_create_path() -> String {
    "/api/v1/profiles/create".to_string()
}

fn default_use_system_proxy() -> bool {
    true
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

fn default_duration_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ApiConfig {
    /// Full URL of the create endpoint.
    pub fn create_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.create_path
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("profile-form")
                .join("profile-form.log")
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            create_path: default_create_path(),
            timeout_seconds: None,
            use_system_proxy: default_use_system_proxy(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_country: default_country(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
