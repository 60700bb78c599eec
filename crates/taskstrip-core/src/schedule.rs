//! Recurring poll timer driven by the caller's clock.
//!
//! The schedule never sleeps or spawns anything: the event loop asks
//! whether a tick is due and when to wake up next.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct PollSchedule {
    interval: Duration,
    next_due: Option<Instant>,
}

impl PollSchedule {
    /// A stopped schedule ticking every `interval` once started.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start ticking. The first tick is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    /// Cancel the timer. No tick is due until `start` is called again.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// When the next tick is due, if running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// Consume the tick due at `now`, if any, and arm the next one.
    ///
    /// Missed ticks are not replayed: after a stall the next tick is one
    /// interval from `now`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.interval;
                self.next_due = Some(if next > now { next } else { now + self.interval });
                true
            }
            _ => false,
        }
    }
}
