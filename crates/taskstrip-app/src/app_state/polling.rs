//! Poll ticks, intent draining, and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use taskstrip_core::{IntentOutcome, PollOutcome};

use super::core::TaskstripApp;

impl TaskstripApp {
    /// Apply queued intents, run a poll if one is due, and schedule the
    /// next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.drain_intents();

        if self.schedule.fire_if_due(Instant::now()) {
            self.run_poll();
        }

        match self.schedule.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    /// One reconciliation tick against the strip.
    pub(super) fn run_poll(&mut self) -> PollOutcome {
        let outcome = self.engine.poll(&mut self.strip);
        if outcome.changed() {
            self.strip_changed();
        }
        outcome
    }

    /// Hand every queued intent to the engine, in arrival order.
    pub(super) fn drain_intents(&mut self) {
        let mut closed = false;
        for intent in self.intents.drain() {
            let outcome = self.engine.handle_intent(intent, &mut self.strip);
            closed |= matches!(outcome, IntentOutcome::Closed);
        }
        if closed {
            self.strip_changed();
        }
    }

    fn strip_changed(&self) {
        self.update_window_title();
        self.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use taskstrip_common::{Intent, WindowHandle};
    use taskstrip_config::TaskstripConfig;
    use taskstrip_gateway::{ScriptedCommand, ScriptedGateway};

    use crate::app_state::core::TaskstripApp;

    #[test]
    fn run_poll_fills_the_strip() {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        script.set_pairs([(1, "Editor"), (2, "Browser")]);

        assert!(app.run_poll().changed());
        assert_eq!(app.strip.len(), 2);
        assert!(!app.run_poll().changed());
    }

    #[test]
    fn failed_poll_keeps_the_strip() {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        script.set_pairs([(1, "Editor")]);
        app.run_poll();

        script.fail_next_lists(1);
        assert!(!app.run_poll().is_applied());
        assert_eq!(app.strip.len(), 1);
    }

    #[test]
    fn drain_applies_intents_in_order() {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        script.set_pairs([(1, "Editor"), (2, "Browser")]);
        app.run_poll();

        let sender = app.intents.sender();
        sender.send(Intent::Activate(WindowHandle(2)));
        sender.send(Intent::Close(WindowHandle(1)));
        sender.send(Intent::Activate(WindowHandle(1)));
        app.drain_intents();

        let commands: Vec<_> = script
            .commands()
            .into_iter()
            .filter(|c| !matches!(c, ScriptedCommand::Connect))
            .collect();
        // The second activate targets a closed entry and is dropped
        assert_eq!(
            commands,
            vec![
                ScriptedCommand::Activate(WindowHandle(2)),
                ScriptedCommand::Close(WindowHandle(1)),
            ]
        );
    }
}
