//! Reading a config file from disk.

use std::io::ErrorKind;
use std::path::Path;

use taskstrip_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::TaskstripConfig;
use crate::validation;

/// Parse the TOML file at `path`. Missing keys take their defaults.
///
/// Out-of-range values are reported as a warning and kept; use
/// [`crate::load_config`] for a config that is guaranteed valid.
pub fn load_from_path(path: &Path) -> Result<TaskstripConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("cannot read {}: {e}", path.display())),
    })?;

    let config: TaskstripConfig = toml::from_str(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config has invalid values: {e}");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load `<config dir>/taskstrip/config.toml`, seeding it with the commented
/// template (and returning defaults) on first run.
pub fn load_default() -> Result<TaskstripConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config yet, writing defaults");
            create_default_config(&path)?;
            Ok(TaskstripConfig::default())
        }
        other => other,
    }
}
