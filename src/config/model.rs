//! Configuration data model.
//!
//! All structs derive `Deserialize` so they can be read from TOML.
//! Every field has a sensible default so the application works out of the box.

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub fact_service: FactServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where trivia is fetched from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FactServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for FactServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl FactServiceConfig {
    /// Host portion of `base_url`, for display.
    pub fn host(&self) -> &str {
        let without_scheme = self
            .base_url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.base_url);
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }
}

fn default_base_url() -> String {
    "http://numbersapi.com".into()
}

/// Diagnostic log written while the TUI owns the terminal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".into()
}

fn default_log_dir() -> String {
    "~/.local/share/numfact/logs".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fact_service.base_url, "http://numbersapi.com");
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [fact_service]
            base_url = "http://localhost:9000"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.fact_service.base_url, "http://localhost:9000");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.enabled);
        assert_eq!(config.logging.log_dir, "~/.local/share/numfact/logs");
    }

    #[test]
    fn test_host() {
        let mut service = FactServiceConfig::default();
        assert_eq!(service.host(), "numbersapi.com");
        service.base_url = "http://localhost:9000/api/".into();
        assert_eq!(service.host(), "localhost:9000");
        service.base_url = "numbers.example".into();
        assert_eq!(service.host(), "numbers.example");
    }
}
