//! Reconciliation cadence and entry identity.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How a tracked entry is matched against a fresh snapshot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryIdentity {
    /// Same handle and same display name. A renamed window is treated as a
    /// reused handle: its entry is destroyed and recreated in the same slot.
    #[default]
    HandleAndName,
    /// Same handle only. Labels keep the name seen at creation.
    Handle,
}

/// Polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Reconciliation interval in milliseconds (valid range: 100-60000).
    pub interval_ms: u32,
    pub identity: EntryIdentity,
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            identity: EntryIdentity::HandleAndName,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_config_defaults() {
        let config = PollConfig::default();
        assert_eq!(config.interval_ms, 1000);
        assert_eq!(config.interval(), Duration::from_secs(1));
        assert_eq!(config.identity, EntryIdentity::HandleAndName);
    }

    #[test]
    fn poll_config_partial_toml() {
        let config: PollConfig = toml::from_str("identity = \"handle\"").unwrap();
        assert_eq!(config.identity, EntryIdentity::Handle);
        assert_eq!(config.interval_ms, 1000);
    }

    #[test]
    fn identity_serializes_snake_case() {
        let json = serde_json::to_string(&EntryIdentity::HandleAndName).unwrap();
        assert_eq!(json, "\"handle_and_name\"");
    }
}
