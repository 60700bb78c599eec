//! Where the config file lives, and seeding it on first run.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use taskstrip_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "taskstrip";
const FILE_NAME: &str = "config.toml";

/// `<config dir>/taskstrip/config.toml` for the current user.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no per-user config directory on this platform".into()))
}

/// Write the commented template to `path`, creating parent directories.
/// An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "config file already present");
            return Ok(());
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot create {}: {e}",
                path.display()
            )))
        }
    };
    file.write_all(default_config_toml().as_bytes()).map_err(|e| {
        ConfigError::ParseError(format!("cannot write {}: {e}", path.display()))
    })?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
