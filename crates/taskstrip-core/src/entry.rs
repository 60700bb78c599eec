use std::fmt;

use taskstrip_common::{Intent, WindowHandle};

/// Lifecycle identity of one taskbar entry.
///
/// A window whose entry is destroyed and recreated gets a new id, even if
/// the handle and name are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry-{}", self.0)
    }
}

/// Which pointer button hit an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// One open window as shown on the strip.
///
/// Entries are minted by the engine. They never touch engine state; a
/// click only turns into an [`Intent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    id: EntryId,
    handle: WindowHandle,
    display_name: String,
}

impl TaskbarEntry {
    pub fn new(id: EntryId, handle: WindowHandle, display_name: impl Into<String>) -> Self {
        Self {
            id,
            handle,
            display_name: display_name.into(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn activate_intent(&self) -> Intent {
        Intent::Activate(self.handle)
    }

    pub fn close_intent(&self) -> Intent {
        Intent::Close(self.handle)
    }

    /// Primary button activates, secondary closes, anything else is ignored.
    pub fn intent_for(&self, button: PointerButton) -> Option<Intent> {
        match button {
            PointerButton::Primary => Some(self.activate_intent()),
            PointerButton::Secondary => Some(self.close_intent()),
            PointerButton::Other => None,
        }
    }
}
