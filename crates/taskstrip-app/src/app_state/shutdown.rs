//! Graceful shutdown: stop polling, release entries, disconnect.

use super::core::TaskstripApp;

impl TaskstripApp {
    /// Stop the poll schedule, destroy every entry through the strip, and
    /// disconnect the gateway. Later calls do nothing.
    pub(super) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        self.should_exit = true;
        tracing::info!("Initiating graceful shutdown");

        self.schedule.stop();

        let dropped = self.intents.drain().len();
        if dropped > 0 {
            tracing::debug!(dropped, "discarding pending intents");
        }

        if !self.strip.is_empty() {
            tracing::debug!(entries = self.strip.len(), "releasing entries");
        }
        self.engine.shutdown(&mut self.strip);
        self.update_window_title();

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use taskstrip_common::{Intent, WindowHandle};
    use taskstrip_config::TaskstripConfig;
    use taskstrip_gateway::{NoopGateway, ScriptedCommand, ScriptedGateway};

    use crate::app_state::core::TaskstripApp;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(NoopGateway::new()));
        app.shutdown();
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_releases_everything() {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        script.set_pairs([(1, "Editor"), (2, "Browser")]);
        app.schedule.start(Instant::now());
        app.run_poll();
        app.intents.sender().send(Intent::Close(WindowHandle(1)));

        app.shutdown();
        assert!(!app.schedule.is_running());
        assert!(app.strip.is_empty());
        assert!(app.engine.tracked().is_empty());
        // The pending close was discarded, not sent
        assert!(!script
            .commands()
            .contains(&ScriptedCommand::Close(WindowHandle(1))));
        assert_eq!(script.commands().last(), Some(&ScriptedCommand::Disconnect));
    }

    #[test]
    fn shutdown_is_idempotent() {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        script.set_pairs([(1, "Editor")]);
        app.run_poll();

        app.shutdown();
        app.shutdown();
        let disconnects = script
            .commands()
            .iter()
            .filter(|c| **c == ScriptedCommand::Disconnect)
            .count();
        assert_eq!(disconnects, 1);
    }
}
