//! Window-set reconciliation for the taskstrip panel.
//!
//! The engine polls a [`WindowManagerGateway`](taskstrip_gateway::WindowManagerGateway),
//! diffs the result against the entries it tracks, and reports every
//! entry it creates or destroys to a [`PanelSurface`]. It is the only
//! writer of the tracked set.

pub mod engine;
pub mod entry;
pub mod schedule;
pub mod surface;
pub mod tracked;

pub use engine::{IntentOutcome, PollOutcome, ReconciliationEngine};
pub use entry::{EntryId, PointerButton, TaskbarEntry};
pub use schedule::PollSchedule;
pub use surface::PanelSurface;
pub use tracked::TrackedSet;
