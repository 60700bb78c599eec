//! System configuration types: window manager connection and logging.

use serde::{Deserialize, Serialize};

/// Window manager connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// X display to connect to; `None` uses `$DISPLAY`.
    pub display: Option<String>,
    /// Move a window onto all desktops before activating it, so that
    /// clicking an entry always brings the window into view.
    pub activate_on_all_desktops: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            display: None,
            activate_on_all_desktops: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "taskstrip=debug",
            LogLevel::Info => "taskstrip=info",
            LogLevel::Warning => "taskstrip=warn",
            LogLevel::Error => "taskstrip=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_config_defaults() {
        let config = GatewayConfig::default();
        assert!(config.display.is_none());
        assert!(config.activate_on_all_desktops);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str("level = \"DEBUG\"").unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert!(toml::from_str::<LoggingConfig>("level = \"debug\"").is_err());
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::Debug.directive(), "taskstrip=debug");
        assert_eq!(LogLevel::Warning.directive(), "taskstrip=warn");
        assert_eq!(LoggingConfig::default().level.directive(), "taskstrip=info");
    }
}
