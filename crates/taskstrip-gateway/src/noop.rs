//! No-op gateway.
//!
//! Used as a fallback on platforms without a window manager integration.

use taskstrip_common::{WindowHandle, WindowSnapshot};

use super::{Result, WindowManagerGateway};

/// A gateway that sees no windows. All commands succeed silently.
#[derive(Debug, Default)]
pub struct NoopGateway {
    connected: bool,
}

impl NoopGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowManagerGateway for NoopGateway {
    fn connect(&mut self) -> Result<()> {
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn list_windows(&mut self) -> Result<WindowSnapshot> {
        Ok(WindowSnapshot::new())
    }

    fn activate(&mut self, _handle: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn close(&mut self, _handle: WindowHandle) -> Result<()> {
        Ok(())
    }
}
