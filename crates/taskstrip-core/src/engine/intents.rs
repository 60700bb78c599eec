//! Applying activate/close requests produced by the strip.

use taskstrip_common::Intent;
use tracing::{debug, warn};

use crate::surface::PanelSurface;

use super::{IntentOutcome, ReconciliationEngine};

impl ReconciliationEngine {
    /// Apply one user intent.
    ///
    /// Intents for handles that are no longer tracked are dropped without
    /// contacting the gateway. A successful close removes the entry at once;
    /// if the window survives, the next poll recreates it.
    pub fn handle_intent(
        &mut self,
        intent: Intent,
        surface: &mut dyn PanelSurface,
    ) -> IntentOutcome {
        let handle = intent.handle();
        if !self.tracked.contains(handle) {
            debug!(%handle, intent = intent.label(), "ignoring intent for untracked window");
            return IntentOutcome::Stale;
        }

        let result = match intent {
            Intent::Activate(handle) => self.gateway.activate(handle),
            Intent::Close(handle) => self.gateway.close(handle),
        };
        if let Err(e) = result {
            warn!(%handle, intent = intent.label(), error = %e, "window command failed");
            return IntentOutcome::Failed(e);
        }

        match intent {
            Intent::Activate(_) => {
                debug!(%handle, "activated window");
                IntentOutcome::Activated
            }
            Intent::Close(_) => {
                if let Some(entry) = self.tracked.remove(handle) {
                    debug!(%handle, id = %entry.id(), "closed window, entry destroyed");
                    surface.on_entry_destroyed(&entry);
                }
                IntentOutcome::Closed
            }
        }
    }

    /// Apply every intent in order.
    pub fn handle_intents(
        &mut self,
        intents: impl IntoIterator<Item = Intent>,
        surface: &mut dyn PanelSurface,
    ) -> Vec<IntentOutcome> {
        intents
            .into_iter()
            .map(|intent| self.handle_intent(intent, surface))
            .collect()
    }
}
