//! Connecting to and releasing the window manager.

use taskstrip_common::GatewayError;
use tracing::info;

use crate::surface::PanelSurface;

use super::ReconciliationEngine;

impl ReconciliationEngine {
    /// Open the gateway session if it is not already open.
    ///
    /// Polling connects lazily as well; this exists so startup can report a
    /// missing display before the first tick.
    pub fn connect(&mut self) -> Result<(), GatewayError> {
        if self.gateway.is_connected() {
            return Ok(());
        }
        self.gateway.connect()?;
        info!("connected to window manager");
        Ok(())
    }

    /// Destroy every entry and release the gateway. Safe to call twice.
    pub fn shutdown(&mut self, surface: &mut dyn PanelSurface) {
        let entries = self.tracked.take_all();
        let released = entries.len();
        for entry in &entries {
            surface.on_entry_destroyed(entry);
        }
        if self.gateway.is_connected() {
            self.gateway.disconnect();
            info!(released, "disconnected from window manager");
        }
    }
}
