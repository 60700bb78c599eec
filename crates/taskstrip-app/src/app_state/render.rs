//! Frame painting.

use taskstrip_renderer::PanelScene;

use super::core::TaskstripApp;

impl TaskstripApp {
    /// The strip as it should look at `scale_factor`.
    pub(super) fn scene(&self, scale_factor: f64) -> PanelScene {
        PanelScene::build(
            self.theme,
            self.strip.width(),
            self.strip.height(),
            scale_factor,
            self.strip
                .slots()
                .map(|(rect, entry)| (rect, entry.display_name())),
        )
    }

    pub(super) fn render_frame(&mut self) {
        let Some(scale_factor) = self.renderer.as_ref().map(|r| r.scale_factor()) else {
            return;
        };
        let scene = self.scene(scale_factor);
        if let Some(ref mut renderer) = self.renderer {
            if let Err(e) = renderer.render(&scene) {
                tracing::error!("Render error: {e}");
            }
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use taskstrip_config::TaskstripConfig;
    use taskstrip_gateway::ScriptedGateway;

    use crate::app_state::core::TaskstripApp;

    #[test]
    fn scene_paints_every_strip_slot_with_its_name() {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        app.strip.set_width(1920.0);
        script.set_pairs([(1, "  Editor "), (2, "Browser"), (3, "")]);
        app.run_poll();

        let scene = app.scene(1.0);
        let painted: Vec<(f64, f64, &str)> = scene
            .slots()
            .iter()
            .map(|slot| (slot.rect.x, slot.rect.width, slot.label.text.as_str()))
            .collect();
        assert_eq!(painted, vec![(0.0, 200.0, "Editor"), (202.0, 200.0, "Browser")]);
        assert!(scene.slots().iter().all(|slot| slot.rect.height == 50.0));
    }

    #[test]
    fn retitled_window_is_repainted_in_place() {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        app.strip.set_width(1920.0);
        script.set_pairs([(1, "Firefox - tab1"), (2, "Terminal"), (3, "Editor")]);
        app.run_poll();
        script.set_pairs([(1, "Firefox - tab2"), (2, "Terminal"), (3, "Editor")]);
        app.run_poll();

        let labels: Vec<String> = app.scene(1.0).labels().map(|l| l.text.clone()).collect();
        assert_eq!(labels, vec!["Firefox - tab2", "Terminal", "Editor"]);
    }

    #[test]
    fn narrow_panel_drops_items_past_the_edge() {
        let (gateway, script) = ScriptedGateway::new();
        let mut app = TaskstripApp::new(TaskstripConfig::default(), Box::new(gateway));
        app.strip.set_width(250.0);
        script.set_pairs([(1, "a"), (2, "b"), (3, "c")]);
        app.run_poll();

        // Three items at the 100px minimum: the third starts at 204
        let scene = app.scene(1.0);
        assert_eq!(scene.slots().len(), 3);
        assert_eq!(scene.slots()[2].rect.width, 46.0);

        app.strip.set_width(150.0);
        assert_eq!(app.scene(1.0).slots().len(), 2);
    }
}
