//! Configuration schema types for taskstrip.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults of the stock panel.

mod panel;
mod poll;
mod system;

pub use panel::*;
pub use poll::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for taskstrip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskstripConfig {
    pub poll: PollConfig,
    pub panel: PanelConfig,
    pub gateway: GatewayConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: TaskstripConfig = toml::from_str("").unwrap();
        assert_eq!(config.poll.interval_ms, 1000);
        assert_eq!(config.poll.identity, EntryIdentity::HandleAndName);
        assert_eq!(config.panel.height, 50);
        assert!(config.gateway.display.is_none());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_override_independently() {
        let toml_str = r#"
[poll]
interval_ms = 250

[gateway]
display = ":1"
"#;
        let config: TaskstripConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.poll.interval_ms, 250);
        assert_eq!(config.gateway.display.as_deref(), Some(":1"));
        // Untouched sections keep defaults
        assert_eq!(config.panel.spacing, 2);
        assert!(config.gateway.activate_on_all_desktops);
    }

    #[test]
    fn unknown_identity_is_rejected() {
        let toml_str = r#"
[poll]
identity = "title"
"#;
        assert!(toml::from_str::<TaskstripConfig>(toml_str).is_err());
    }
}
