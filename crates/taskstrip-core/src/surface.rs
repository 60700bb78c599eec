use taskstrip_common::WindowHandle;

use crate::entry::TaskbarEntry;

/// The presentation side of the panel, as seen by the engine.
///
/// The engine calls `on_entry_destroyed` when an entry's control must be
/// detached and released, then `on_entry_created` for each new entry in
/// increasing `position` order. `position` is the entry's index in the
/// strip once it is inserted: the end of the strip for a new window, the
/// vacated slot for one recreated under a new name.
pub trait PanelSurface {
    fn on_entry_created(&mut self, position: usize, entry: &TaskbarEntry);

    fn on_entry_destroyed(&mut self, entry: &TaskbarEntry);

    /// The panel's own top-level window, never shown as an entry. `None`
    /// until the panel window exists.
    fn own_window_handle(&self) -> Option<WindowHandle>;
}
