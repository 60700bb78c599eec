//! TaskstripApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use taskstrip_common::IntentQueue;
use taskstrip_config::TaskstripConfig;
use taskstrip_core::{PointerButton, PollSchedule, ReconciliationEngine};
use taskstrip_gateway::WindowManagerGateway;
use taskstrip_renderer::{PanelRenderer, Theme};

use super::strip::StripLayout;

/// Top-level application state.
pub struct TaskstripApp {
    pub(super) config: TaskstripConfig,

    // Window set
    pub(super) engine: ReconciliationEngine,
    pub(super) strip: StripLayout,
    pub(super) intents: IntentQueue,
    pub(super) schedule: PollSchedule,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) renderer: Option<PanelRenderer>,
    pub(super) theme: Theme,
    pub(super) cursor_x: Option<f64>,

    pub(super) should_exit: bool,
    pub(super) shut_down: bool,
}

impl TaskstripApp {
    pub fn new(config: TaskstripConfig, gateway: Box<dyn WindowManagerGateway>) -> Self {
        let engine = ReconciliationEngine::from_config(gateway, &config.poll);
        let strip = StripLayout::new(&config.panel);
        let schedule = PollSchedule::new(config.poll.interval());
        let theme = Theme::from_config(&config.panel);
        Self {
            config,
            engine,
            strip,
            intents: IntentQueue::new(),
            schedule,
            window: None,
            renderer: None,
            theme,
            cursor_x: None,
            should_exit: false,
            shut_down: false,
        }
    }

    /// Turn a pointer press at the last cursor position into an intent.
    ///
    /// Returns `true` if an intent was queued.
    pub(super) fn handle_pointer_press(&mut self, button: PointerButton) -> bool {
        let Some(x) = self.cursor_x else {
            return false;
        };
        let Some(intent) = self.strip.intent_at(x, button) else {
            return false;
        };
        tracing::debug!(handle = %intent.handle(), intent = intent.label(), "pointer press");
        self.intents.sender().send(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskstrip_common::{Intent, WindowHandle};
    use taskstrip_gateway::{NoopGateway, ScriptHandle, ScriptedCommand, ScriptedGateway};

    fn app() -> (TaskstripApp, ScriptHandle) {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        app.strip.set_width(1920.0);
        (app, script)
    }

    #[test]
    fn new_app_is_idle() {
        let app = TaskstripApp::new(TaskstripConfig::default(), Box::new(NoopGateway::new()));
        assert!(app.window.is_none());
        assert!(app.engine.tracked().is_empty());
        assert!(!app.schedule.is_running());
        assert!(!app.should_exit);
    }

    #[test]
    fn schedule_uses_configured_interval() {
        let mut config = TaskstripConfig::default();
        config.poll.interval_ms = 250;
        let app = TaskstripApp::new(config, Box::new(NoopGateway::new()));
        assert_eq!(app.schedule.interval().as_millis(), 250);
    }

    #[test]
    fn press_without_cursor_does_nothing() {
        let (mut app, script) = app();
        script.set_pairs([(1, "Editor")]);
        app.run_poll();
        assert!(!app.handle_pointer_press(PointerButton::Primary));
        assert!(app.intents.drain().is_empty());
    }

    #[test]
    fn left_press_queues_activate() {
        let (mut app, script) = app();
        script.set_pairs([(1, "Editor"), (2, "Browser")]);
        app.run_poll();

        app.cursor_x = Some(250.0);
        assert!(app.handle_pointer_press(PointerButton::Primary));
        assert_eq!(app.intents.drain(), vec![Intent::Activate(WindowHandle(2))]);
    }

    #[test]
    fn press_in_empty_area_queues_nothing() {
        let (mut app, script) = app();
        script.set_pairs([(1, "Editor")]);
        app.run_poll();

        app.cursor_x = Some(1500.0);
        assert!(!app.handle_pointer_press(PointerButton::Secondary));
    }

    #[test]
    fn right_press_closes_on_drain() {
        let (mut app, script) = app();
        script.set_pairs([(1, "Editor"), (2, "Browser")]);
        app.run_poll();

        app.cursor_x = Some(10.0);
        assert!(app.handle_pointer_press(PointerButton::Secondary));
        app.drain_intents();

        assert!(script
            .commands()
            .contains(&ScriptedCommand::Close(WindowHandle(1))));
        assert_eq!(app.engine.tracked().len(), 1);
        assert_eq!(app.strip.len(), 1);
        assert_eq!(app.strip.hit_test(10.0).map(|e| e.handle()), Some(WindowHandle(2)));
    }

    #[test]
    fn intents_from_other_senders_are_applied() {
        let (mut app, script) = app();
        script.set_pairs([(1, "Editor")]);
        app.run_poll();

        let sender = app.intents.sender();
        assert!(sender.send(Intent::Activate(WindowHandle(1))));
        app.drain_intents();
        assert!(script
            .commands()
            .contains(&ScriptedCommand::Activate(WindowHandle(1))));
    }
}
