//! The poll tick: read the window list, remove what is gone, add what is new.

use std::collections::{HashMap, HashSet};

use taskstrip_common::{GatewayError, WindowHandle, WindowSnapshot};
use taskstrip_config::EntryIdentity;
use tracing::{debug, info, warn};

use crate::entry::TaskbarEntry;
use crate::surface::PanelSurface;

use super::{PollOutcome, ReconciliationEngine};

/// A tracked entry's fate in the removal pass, in strip order.
enum Slot<'a> {
    Kept(TaskbarEntry),
    /// Same handle, new name: recreated in place.
    Renamed(WindowHandle, &'a str),
}

/// Windows eligible for an entry, in snapshot order: not the panel itself,
/// with a non-blank name, first occurrence of each handle.
fn eligible_windows(
    snapshot: &WindowSnapshot,
    own: Option<WindowHandle>,
) -> Vec<(WindowHandle, &str)> {
    let mut seen = HashSet::new();
    snapshot
        .iter()
        .filter(|window| Some(window.handle) != own)
        .filter_map(|window| window.display_name().map(|name| (window.handle, name)))
        .filter(|(handle, _)| seen.insert(*handle))
        .collect()
}

impl ReconciliationEngine {
    /// Run one reconciliation tick against `surface`.
    ///
    /// A failed query leaves every entry in place. Otherwise all removals
    /// are applied before any addition, so a handle reused for a new window
    /// between two polls yields a destroy followed by a create. Under
    /// [`EntryIdentity::HandleAndName`] the new entry takes the old one's
    /// slot, so a retitled window does not move along the strip.
    pub fn poll(&mut self, surface: &mut dyn PanelSurface) -> PollOutcome {
        if !self.gateway.is_connected() {
            if let Err(e) = self.gateway.connect() {
                return self.skip(e);
            }
        }

        let snapshot = match self.gateway.list_windows() {
            Ok(snapshot) => snapshot,
            Err(e) => return self.skip(e),
        };
        self.note_recovery();

        let current = eligible_windows(&snapshot, surface.own_window_handle());
        let names: HashMap<WindowHandle, &str> = current.iter().copied().collect();

        // Removal pass: every destroy callback fires before any create
        let identity = self.identity;
        let mut slots = Vec::with_capacity(self.tracked.len());
        let mut removed = 0;
        for entry in self.tracked.take_all() {
            let slot = match names.get(&entry.handle()) {
                None => None,
                Some(name)
                    if identity == EntryIdentity::HandleAndName
                        && *name != entry.display_name() =>
                {
                    Some(Slot::Renamed(entry.handle(), *name))
                }
                Some(_) => {
                    slots.push(Slot::Kept(entry));
                    continue;
                }
            };
            debug!(
                handle = %entry.handle(),
                id = %entry.id(),
                name = entry.display_name(),
                "entry destroyed"
            );
            surface.on_entry_destroyed(&entry);
            removed += 1;
            slots.extend(slot);
        }

        // Addition pass: renamed windows get a fresh entry in their old slot,
        // new windows are appended in snapshot order
        let mut added = 0;
        for slot in slots {
            match slot {
                Slot::Kept(entry) => {
                    if let Err(entry) = self.tracked.insert(entry) {
                        warn!(handle = %entry.handle(), "refusing duplicate entry");
                    }
                }
                Slot::Renamed(handle, name) => {
                    if self.create_entry(handle, name, surface) {
                        added += 1;
                    }
                }
            }
        }
        for (handle, name) in current {
            if self.tracked.contains(handle) {
                continue;
            }
            if self.create_entry(handle, name, surface) {
                added += 1;
            }
        }

        if removed > 0 || added > 0 {
            debug!(
                removed,
                added,
                tracked = self.tracked.len(),
                "reconciled window list"
            );
        }

        PollOutcome::Applied { removed, added }
    }

    /// Mint an entry for `handle`, append it, and announce it at its slot.
    fn create_entry(
        &mut self,
        handle: WindowHandle,
        name: &str,
        surface: &mut dyn PanelSurface,
    ) -> bool {
        let entry = self.mint_entry(handle, name);
        debug!(%handle, id = %entry.id(), name, "entry created");
        if let Err(entry) = self.tracked.insert(entry) {
            warn!(handle = %entry.handle(), "refusing duplicate entry");
            return false;
        }
        let position = self.tracked.len() - 1;
        if let Some(entry) = self.tracked.get(handle) {
            surface.on_entry_created(position, entry);
        }
        true
    }

    fn skip(&mut self, error: GatewayError) -> PollOutcome {
        self.consecutive_failures += 1;
        if self.consecutive_failures == 1 {
            warn!(
                error = %error,
                tracked = self.tracked.len(),
                "window list unavailable, keeping current entries"
            );
        } else {
            debug!(
                error = %error,
                failures = self.consecutive_failures,
                "window list still unavailable"
            );
        }
        PollOutcome::Skipped(error)
    }

    fn note_recovery(&mut self) {
        if self.consecutive_failures > 0 {
            info!(
                failed_polls = self.consecutive_failures,
                "window list available again"
            );
            self.consecutive_failures = 0;
        }
    }
}
