//! Internal constants for the app state module.

/// Panel width used when no monitor reports its size.
pub(super) const FALLBACK_WIDTH: u32 = 1280;

/// Title of the panel window before the first poll.
pub(super) const APP_NAME: &str = "taskstrip";
