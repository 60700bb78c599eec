//! Boundary between the panel and the window manager.
//!
//! A gateway lists the open top-level windows and forwards activate/close
//! requests. One long-lived instance is owned by the reconciliation engine;
//! its connection lifecycle is explicit so the engine can reconnect after
//! the windowing system goes away.

pub mod noop;
pub mod scripted;
#[cfg(target_os = "linux")]
pub mod x11;

use taskstrip_common::{GatewayError, WindowHandle, WindowSnapshot};
use taskstrip_config::GatewayConfig;

pub use noop::NoopGateway;
pub use scripted::{ScriptHandle, ScriptedCommand, ScriptedGateway};

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Platform-agnostic access to the window manager.
pub trait WindowManagerGateway: Send {
    /// Open the connection. Calling it while connected is a no-op.
    fn connect(&mut self) -> Result<()>;

    /// Drop the connection. Safe to call repeatedly.
    fn disconnect(&mut self);

    fn is_connected(&self) -> bool;

    /// Current top-level windows in stacking order.
    ///
    /// Fails with [`GatewayError::Unavailable`] when the windowing system
    /// cannot be queried.
    fn list_windows(&mut self) -> Result<WindowSnapshot>;

    /// Ask the window manager to raise and focus `handle`.
    fn activate(&mut self, handle: WindowHandle) -> Result<()>;

    /// Ask `handle` to close gracefully.
    fn close(&mut self, handle: WindowHandle) -> Result<()>;
}

/// Create the platform-appropriate gateway.
///
/// On Linux: an EWMH client over X11.
/// On other platforms: a no-op gateway that never lists any windows.
pub fn create_gateway(config: &GatewayConfig) -> Box<dyn WindowManagerGateway> {
    #[cfg(target_os = "linux")]
    {
        Box::new(x11::EwmhGateway::new(config))
    }
    #[cfg(not(target_os = "linux"))]
    {
        tracing::warn!(
            display = ?config.display,
            "no window manager gateway for this platform, using no-op gateway"
        );
        Box::new(NoopGateway::new())
    }
}
