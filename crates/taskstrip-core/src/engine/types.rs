//! Core types and constructors for ReconciliationEngine.

use taskstrip_common::{GatewayError, WindowHandle};
use taskstrip_config::{EntryIdentity, PollConfig};
use taskstrip_gateway::WindowManagerGateway;

use crate::entry::{EntryId, TaskbarEntry};
use crate::tracked::TrackedSet;

/// Result of one reconciliation tick.
#[derive(Debug)]
pub enum PollOutcome {
    /// The window list could not be read; nothing changed.
    Skipped(GatewayError),
    /// The diff was applied.
    Applied { removed: usize, added: usize },
}

impl PollOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PollOutcome::Applied { .. })
    }

    /// Whether any entry was created or destroyed.
    pub fn changed(&self) -> bool {
        matches!(self, PollOutcome::Applied { removed, added } if removed + added > 0)
    }
}

/// Result of applying one intent.
#[derive(Debug)]
pub enum IntentOutcome {
    Activated,
    /// The close request was dispatched and the entry removed.
    Closed,
    /// The gateway rejected the command; tracked state is untouched.
    Failed(GatewayError),
    /// The handle is no longer tracked; nothing was sent.
    Stale,
}

/// Owns the tracked set and the gateway, and is the only code that
/// mutates the former.
pub struct ReconciliationEngine {
    pub(super) gateway: Box<dyn WindowManagerGateway>,
    pub(super) tracked: TrackedSet,
    pub(super) identity: EntryIdentity,
    /// Source of lifecycle ids; never reused.
    pub(super) next_entry_id: u64,
    /// Failed polls since the last successful one.
    pub(super) consecutive_failures: u32,
}

impl ReconciliationEngine {
    pub fn new(gateway: Box<dyn WindowManagerGateway>, identity: EntryIdentity) -> Self {
        Self {
            gateway,
            tracked: TrackedSet::new(),
            identity,
            next_entry_id: 1,
            consecutive_failures: 0,
        }
    }

    pub fn from_config(gateway: Box<dyn WindowManagerGateway>, config: &PollConfig) -> Self {
        Self::new(gateway, config.identity)
    }

    // -- Accessors --

    pub fn tracked(&self) -> &TrackedSet {
        &self.tracked
    }

    pub fn entry(&self, handle: WindowHandle) -> Option<&TaskbarEntry> {
        self.tracked.get(handle)
    }

    pub fn identity(&self) -> EntryIdentity {
        self.identity
    }

    pub fn is_connected(&self) -> bool {
        self.gateway.is_connected()
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub(super) fn mint_entry(&mut self, handle: WindowHandle, name: &str) -> TaskbarEntry {
        let id = EntryId(self.next_entry_id);
        self.next_entry_id += 1;
        TaskbarEntry::new(id, handle, name)
    }
}
