//! Configuration management
//!
//! This module handles loading and parsing configuration for the ICASA-GEO dashboard.
//! Configuration can be loaded from:
//! - config.yml file
//! - Environment variables (override file settings)
//!
//! Missing optional values are filled with sensible defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Knowledge base backend configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Site branding and page metadata
    #[serde(default)]
    pub site: SiteConfig,
    /// Dashboard configuration
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Knowledge base backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the REST API, including the `/api/v1` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
        }
    }
}

impl BackendConfig {
    /// Request timeout as a `Duration`, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api/v1".to_string()
}

/// Site branding shown in the shell and page metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand name shown in the sidebar header
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Brand subtitle shown under the name
    #[serde(default = "default_site_subtitle")]
    pub subtitle: String,
    /// HTML document title
    #[serde(default = "default_site_title")]
    pub title: String,
    /// Meta description
    #[serde(default = "default_site_description")]
    pub description: String,
    /// Meta keywords
    #[serde(default = "default_site_keywords")]
    pub keywords: String,
    /// Name shown in the sidebar user section
    #[serde(default = "default_user_name")]
    pub user_name: String,
    /// Role shown in the sidebar user section
    #[serde(default = "default_user_role")]
    pub user_role: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            subtitle: default_site_subtitle(),
            title: default_site_title(),
            description: default_site_description(),
            keywords: default_site_keywords(),
            user_name: default_user_name(),
            user_role: default_user_role(),
        }
    }
}

fn default_site_name() -> String {
    "ICASA-GEO".to_string()
}

fn default_site_subtitle() -> String {
    "Gestión Estratégica".to_string()
}

fn default_site_title() -> String {
    "ICASA-GEO | Sistema de Gestión Estratégica Organizacional".to_string()
}

fn default_site_description() -> String {
    "Sistema centralizado para la gestión del Manual de Organización de ICASA".to_string()
}

fn default_site_keywords() -> String {
    "ICASA, gestión organizacional, manual de organización, documentos corporativos".to_string()
}

fn default_user_name() -> String {
    "Admin".to_string()
}

fn default_user_role() -> String {
    "Administrador".to_string()
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Where dashboard figures come from
    #[serde(default)]
    pub source: DashboardSource,
    /// Number of recent documents shown in live mode
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DashboardSource::default(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> usize {
    3
}

/// Dashboard data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardSource {
    /// Built-in example figures (default)
    #[default]
    Mock,
    /// Figures fetched from the knowledge base backend
    Live,
}

/// Error type for configuration parsing
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {message}")]
    ParseError {
        path: String,
        message: String,
    },
}

impl Config {
    /// Load configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file exists but is invalid YAML, returns an error with details.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::ParseError {
                path: path.display().to_string(),
                message: format_yaml_error(&e),
            }
        })?;

        Ok(config)
    }

    /// Load configuration from file with environment variable overrides
    ///
    /// Environment variables follow the pattern:
    /// - ICASA_SERVER_HOST
    /// - ICASA_SERVER_PORT
    /// - ICASA_BACKEND_BASE_URL
    /// - ICASA_BACKEND_TIMEOUT_SECONDS
    /// - ICASA_DASHBOARD_SOURCE
    pub fn load_with_env(path: &std::path::Path) -> anyhow::Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("ICASA_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("ICASA_SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                self.server.port = port;
            }
        }

        if let Ok(base_url) = std::env::var("ICASA_BACKEND_BASE_URL") {
            self.backend.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("ICASA_BACKEND_TIMEOUT_SECONDS") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                self.backend.timeout_seconds = Some(timeout);
            }
        }

        if let Ok(source) = std::env::var("ICASA_DASHBOARD_SOURCE") {
            match source.to_lowercase().as_str() {
                "mock" => self.dashboard.source = DashboardSource::Mock,
                "live" => self.dashboard.source = DashboardSource::Live,
                _ => {} // Ignore invalid values
            }
        }
    }
}

/// Format YAML parsing error with location and context
fn format_yaml_error(e: &serde_yaml::Error) -> String {
    if let Some(location) = e.location() {
        format!(
            "at line {}, column {}: {}",
            location.line(),
            location.column(),
            e
        )
    } else {
        e.to_string()
    }
}

// Shared mutex for all config tests that modify environment variables.
#[cfg(test)]
static CONFIG_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
const ENV_KEYS: [&str; 5] = [
    "ICASA_SERVER_HOST",
    "ICASA_SERVER_PORT",
    "ICASA_BACKEND_BASE_URL",
    "ICASA_BACKEND_TIMEOUT_SECONDS",
    "ICASA_DASHBOARD_SOURCE",
];

#[cfg(test)]
fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    CONFIG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn valid_host_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("0.0.0.0".to_string()),
            Just("127.0.0.1".to_string()),
            Just("localhost".to_string()),
            "[a-z][a-z0-9-]{0,15}".prop_map(|s| s),
        ]
    }

    fn valid_base_url_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("http://localhost:8000/api/v1".to_string()),
            "[a-z][a-z0-9-]{0,12}".prop_map(|h| format!("https://{}.example/api/v1", h)),
        ]
    }

    fn valid_config_strategy() -> impl Strategy<Value = Config> {
        (
            valid_host_strategy(),
            1u16..=65535,
            valid_base_url_strategy(),
            proptest::option::of(1u64..=600),
            prop_oneof![Just(DashboardSource::Mock), Just(DashboardSource::Live)],
            1usize..=20,
        )
            .prop_map(|(host, port, base_url, timeout_seconds, source, recent_limit)| Config {
                server: ServerConfig { host, port },
                backend: BackendConfig { base_url, timeout_seconds },
                site: SiteConfig::default(),
                dashboard: DashboardConfig { source, recent_limit },
            })
    }

    fn malformed_yaml_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("server:\n  port: not_a_number".to_string()),
            Just("server:\n  port: true".to_string()),
            Just("server:\n  port: 99999999999".to_string()),
            Just("backend:\n  timeout_seconds: -1".to_string()),
            Just("backend: [a, b]".to_string()),
            Just("dashboard:\n  source: cached".to_string()),
            Just("dashboard:\n  recent_limit: many".to_string()),
            Just("site: 42".to_string()),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn config_roundtrip(config in valid_config_strategy()) {
            let yaml = serde_yaml::to_string(&config).expect("Failed to serialize config");

            let mut file = NamedTempFile::new().expect("Failed to create temp file");
            write!(file, "{}", yaml).expect("Failed to write config");

            let parsed = Config::load(file.path()).expect("Failed to parse config");

            prop_assert_eq!(config.server.host, parsed.server.host);
            prop_assert_eq!(config.server.port, parsed.server.port);
            prop_assert_eq!(config.backend.base_url, parsed.backend.base_url);
            prop_assert_eq!(config.backend.timeout_seconds, parsed.backend.timeout_seconds);
            prop_assert_eq!(config.dashboard.source, parsed.dashboard.source);
            prop_assert_eq!(config.dashboard.recent_limit, parsed.dashboard.recent_limit);
        }

        #[test]
        fn malformed_config_is_rejected(yaml in malformed_yaml_strategy()) {
            let mut file = NamedTempFile::new().expect("Failed to create temp file");
            write!(file, "{}", yaml).expect("Failed to write config");

            let result = Config::load(file.path());

            prop_assert!(result.is_err(), "Malformed YAML should produce an error");
            let err_msg = result.unwrap_err().to_string();
            prop_assert!(err_msg.len() > 10, "Error message should be descriptive: {}", err_msg);
        }

        #[test]
        fn env_port_override((port, file_port) in (1u16..=65535, 1u16..=65535)) {
            let _guard = lock_env();
            clear_env();

            let mut file = NamedTempFile::new().expect("Failed to create temp file");
            write!(file, "server:\n  port: {}\n", file_port).expect("Failed to write config");

            std::env::set_var("ICASA_SERVER_PORT", port.to_string());
            let config = Config::load_with_env(file.path()).expect("Failed to load config");
            clear_env();

            prop_assert_eq!(config.server.port, port);
        }
    }
}
