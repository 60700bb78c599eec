//! Strip layout: the panel's view of the tracked entries.
//!
//! Entries sit left to right at the positions the engine reports. Every
//! item gets the same width: the panel width shared evenly, clamped to the
//! configured bounds.

use taskstrip_common::{Intent, Rect, WindowHandle};
use taskstrip_config::PanelConfig;
use taskstrip_core::{EntryId, PanelSurface, PointerButton, TaskbarEntry};

pub struct StripLayout {
    entries: Vec<TaskbarEntry>,
    own_handle: Option<WindowHandle>,
    width: f64,
    height: f64,
    spacing: f64,
    item_min_width: f64,
    item_max_width: f64,
}

impl StripLayout {
    pub fn new(panel: &PanelConfig) -> Self {
        Self {
            entries: Vec::new(),
            own_handle: None,
            width: 0.0,
            height: f64::from(panel.height),
            spacing: f64::from(panel.spacing),
            item_min_width: f64::from(panel.item_min_width),
            item_max_width: f64::from(panel.item_max_width),
        }
    }

    pub fn set_own_handle(&mut self, handle: Option<WindowHandle>) {
        self.own_handle = handle;
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.max(0.0);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    /// Width of every item for the current entry count.
    pub fn item_width(&self) -> f64 {
        let count = self.entries.len();
        if count == 0 {
            return self.item_max_width;
        }
        let gaps = self.spacing * (count - 1) as f64;
        let share = (self.width - gaps) / count as f64;
        share.max(self.item_min_width).min(self.item_max_width)
    }

    /// Each entry with its rectangle, left to right. Items past the right
    /// edge are laid out but not visible.
    pub fn slots(&self) -> impl Iterator<Item = (Rect, &TaskbarEntry)> + '_ {
        let width = self.item_width();
        let stride = width + self.spacing;
        self.entries.iter().enumerate().map(move |(i, entry)| {
            let rect = Rect {
                x: i as f64 * stride,
                y: 0.0,
                width,
                height: self.height,
            };
            (rect, entry)
        })
    }

    /// The entry under horizontal position `x`, if any. Gaps hit nothing.
    pub fn hit_test(&self, x: f64) -> Option<&TaskbarEntry> {
        self.slots()
            .find(|(rect, _)| rect.contains_x(x))
            .map(|(_, entry)| entry)
    }

    /// The intent a press of `button` at `x` produces.
    pub fn intent_at(&self, x: f64, button: PointerButton) -> Option<Intent> {
        self.hit_test(x)?.intent_for(button)
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }
}

impl PanelSurface for StripLayout {
    fn on_entry_created(&mut self, position: usize, entry: &TaskbarEntry) {
        let position = position.min(self.entries.len());
        self.entries.insert(position, entry.clone());
    }

    fn on_entry_destroyed(&mut self, entry: &TaskbarEntry) {
        if let Some(index) = self.position(entry.id()) {
            self.entries.remove(index);
        }
    }

    fn own_window_handle(&self) -> Option<WindowHandle> {
        self.own_handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(width: f64) -> StripLayout {
        let mut strip = StripLayout::new(&PanelConfig::default());
        strip.set_width(width);
        strip
    }

    fn add(strip: &mut StripLayout, id: u64, handle: u64, name: &str) -> TaskbarEntry {
        let entry = TaskbarEntry::new(EntryId(id), WindowHandle(handle), name);
        strip.on_entry_created(strip.len(), &entry);
        entry
    }

    #[test]
    fn wide_panel_caps_item_width() {
        let mut strip = strip(1920.0);
        add(&mut strip, 1, 10, "Editor");
        add(&mut strip, 2, 20, "Browser");
        assert_eq!(strip.item_width(), 200.0);
    }

    #[test]
    fn crowded_panel_shrinks_to_minimum() {
        let mut strip = strip(300.0);
        for i in 0..5 {
            add(&mut strip, i, i, "w");
        }
        assert_eq!(strip.item_width(), 100.0);
    }

    #[test]
    fn items_share_width_between_bounds() {
        let mut strip = strip(452.0);
        for i in 0..3 {
            add(&mut strip, i, i, "w");
        }
        // (452 - 2 * 2) / 3
        assert!((strip.item_width() - 149.333).abs() < 0.01);
    }

    #[test]
    fn slots_are_laid_out_with_spacing() {
        let mut strip = strip(1920.0);
        add(&mut strip, 1, 10, "Editor");
        add(&mut strip, 2, 20, "Browser");
        let xs: Vec<f64> = strip.slots().map(|(rect, _)| rect.x).collect();
        assert_eq!(xs, vec![0.0, 202.0]);
        assert!(strip.slots().all(|(rect, _)| rect.height == 50.0));
    }

    #[test]
    fn hit_test_finds_entry_and_skips_gaps() {
        let mut strip = strip(1920.0);
        add(&mut strip, 1, 10, "Editor");
        add(&mut strip, 2, 20, "Browser");
        assert_eq!(strip.hit_test(0.0).map(|e| e.handle()), Some(WindowHandle(10)));
        assert_eq!(strip.hit_test(199.9).map(|e| e.handle()), Some(WindowHandle(10)));
        assert!(strip.hit_test(201.0).is_none());
        assert_eq!(strip.hit_test(250.0).map(|e| e.handle()), Some(WindowHandle(20)));
        assert!(strip.hit_test(500.0).is_none());
        assert!(strip.hit_test(-1.0).is_none());
    }

    #[test]
    fn buttons_map_to_intents_at_position() {
        let mut strip = strip(1920.0);
        add(&mut strip, 1, 10, "Editor");
        assert_eq!(
            strip.intent_at(50.0, PointerButton::Primary),
            Some(Intent::Activate(WindowHandle(10)))
        );
        assert_eq!(
            strip.intent_at(50.0, PointerButton::Secondary),
            Some(Intent::Close(WindowHandle(10)))
        );
        assert_eq!(strip.intent_at(50.0, PointerButton::Other), None);
        assert_eq!(strip.intent_at(900.0, PointerButton::Primary), None);
    }

    #[test]
    fn destroyed_entry_vacates_its_slot() {
        let mut strip = strip(1920.0);
        add(&mut strip, 1, 10, "a");
        let middle = add(&mut strip, 2, 20, "b");
        add(&mut strip, 3, 30, "c");
        strip.on_entry_destroyed(&middle);
        let handles: Vec<u64> = strip.entries().iter().map(|e| e.handle().0).collect();
        assert_eq!(handles, vec![10, 30]);
        assert_eq!(strip.hit_test(250.0).map(|e| e.handle()), Some(WindowHandle(30)));
    }

    #[test]
    fn recreated_entry_fills_the_vacated_slot() {
        let mut strip = strip(1920.0);
        let first = add(&mut strip, 1, 10, "Firefox - tab1");
        add(&mut strip, 2, 20, "Terminal");
        strip.on_entry_destroyed(&first);
        let renamed = TaskbarEntry::new(EntryId(3), WindowHandle(10), "Firefox - tab2");
        strip.on_entry_created(0, &renamed);
        let names: Vec<&str> = strip.entries().iter().map(|e| e.display_name()).collect();
        assert_eq!(names, vec!["Firefox - tab2", "Terminal"]);
    }

    #[test]
    fn out_of_range_position_appends() {
        let mut strip = strip(1920.0);
        add(&mut strip, 1, 10, "a");
        strip.on_entry_created(9, &TaskbarEntry::new(EntryId(2), WindowHandle(20), "b"));
        assert_eq!(strip.entries()[1].handle(), WindowHandle(20));
    }

    #[test]
    fn destroy_matches_by_entry_id() {
        let mut strip = strip(1920.0);
        add(&mut strip, 1, 10, "old");
        let stale = TaskbarEntry::new(EntryId(9), WindowHandle(10), "old");
        strip.on_entry_destroyed(&stale);
        assert_eq!(strip.len(), 1);
    }

    #[test]
    fn reports_own_handle() {
        let mut strip = strip(100.0);
        assert!(strip.own_window_handle().is_none());
        strip.set_own_handle(Some(WindowHandle(0x99)));
        assert_eq!(strip.own_window_handle(), Some(WindowHandle(0x99)));
    }
}
