//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod panel;
mod poll;


use crate::schema::TaskstripConfig;
use taskstrip_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TaskstripConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    poll::validate_poll(&mut errors, config);
    panel::validate_panel(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
