//! Window title management: mirrors the number of entries.

use super::core::TaskstripApp;
use super::types::APP_NAME;

/// Title for a panel showing `count` entries.
pub(super) fn window_title(count: usize) -> String {
    match count {
        1 => format!("{APP_NAME} (1 window)"),
        n => format!("{APP_NAME} ({n} windows)"),
    }
}

impl TaskstripApp {
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&window_title(self.strip.len()));
    }
}
