use std::path::PathBuf;

use crate::types::WindowHandle;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by a window manager gateway.
///
/// `Unavailable` means the windowing system could not be queried at all;
/// callers must treat it as "no information this tick", never as "no windows".
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("window manager unavailable: {0}")]
    Unavailable(String),

    #[error("failed to dispatch {command} to {handle}: {reason}")]
    CommandDispatch {
        command: &'static str,
        handle: WindowHandle,
        reason: String,
    },
}

impl GatewayError {
    pub fn dispatch(command: &'static str, handle: WindowHandle, reason: impl Into<String>) -> Self {
        Self::CommandDispatch {
            command,
            handle,
            reason: reason.into(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TaskstripError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("panel shell error: {0}")]
    Shell(String),
}
