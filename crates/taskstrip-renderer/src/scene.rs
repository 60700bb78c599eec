//! What to paint for one frame, computed without touching the GPU.
//!
//! Coordinates are physical pixels, the same space the strip layout and
//! pointer events use.

use taskstrip_common::{Color, Rect};
use taskstrip_config::PanelConfig;

use crate::quad::QuadInstance;

/// Horizontal inset of a label inside its item, in logical pixels.
const LABEL_PADDING: f64 = 8.0;
const LINE_HEIGHT: f32 = 1.25;

/// Colors and type size of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub item_background: Color,
    pub text_color: Color,
    /// Label size in logical pixels.
    pub font_size: f32,
}

impl Theme {
    /// Colors that fail to parse fall back to the defaults; validation has
    /// already rejected them for loaded configs.
    pub fn from_config(panel: &PanelConfig) -> Self {
        let defaults = PanelConfig::default();
        let color = |value: &str, fallback: &str| {
            Color::from_hex(value)
                .or_else(|| Color::from_hex(fallback))
                .unwrap_or(Color::from_rgba(0, 0, 0, 255))
        };
        Self {
            background: color(&panel.background, &defaults.background),
            item_background: color(&panel.item_background, &defaults.item_background),
            text_color: color(&panel.text_color, &defaults.text_color),
            font_size: panel.font_size as f32,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&PanelConfig::default())
    }
}

/// Pixel clip rectangle for a label, as glyphon expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelPaint {
    pub text: String,
    pub left: f32,
    pub top: f32,
    pub bounds: ClipBounds,
}

impl LabelPaint {
    /// Room for glyphs before the clip edge.
    pub fn width(&self) -> f32 {
        (self.bounds.right - self.bounds.left).max(0) as f32
    }
}

/// One visible item: its background rectangle and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotPaint {
    pub rect: Rect,
    pub label: LabelPaint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelScene {
    pub width: f64,
    pub height: f64,
    pub theme: Theme,
    /// Physical font size and line height.
    pub font_px: f32,
    pub line_px: f32,
    slots: Vec<SlotPaint>,
}

impl PanelScene {
    /// Lay out a frame for a panel of `width` x `height` physical pixels.
    ///
    /// Items starting past the right edge are skipped; an item straddling
    /// it is cut at the edge, and so is its label.
    pub fn build<'a>(
        theme: Theme,
        width: f64,
        height: f64,
        scale_factor: f64,
        slots: impl IntoIterator<Item = (Rect, &'a str)>,
    ) -> Self {
        let font_px = theme.font_size * scale_factor as f32;
        let line_px = font_px * LINE_HEIGHT;
        let padding = LABEL_PADDING * scale_factor;

        let slots = slots
            .into_iter()
            .filter(|(rect, _)| rect.x < width)
            .map(|(rect, name)| {
                let rect = Rect {
                    width: rect.width.min(width - rect.x),
                    ..rect
                };
                let top = rect.y + ((rect.height - f64::from(line_px)) / 2.0).max(0.0);
                let left = rect.x + padding;
                let label = LabelPaint {
                    text: name.to_string(),
                    left: left as f32,
                    top: top as f32,
                    bounds: ClipBounds {
                        left: left.floor() as i32,
                        top: rect.y.floor() as i32,
                        right: (rect.x + rect.width - padding).floor() as i32,
                        bottom: (rect.y + rect.height).ceil() as i32,
                    },
                };
                SlotPaint { rect, label }
            })
            .collect();

        Self {
            width,
            height,
            theme,
            font_px,
            line_px,
            slots,
        }
    }

    pub fn slots(&self) -> &[SlotPaint] {
        &self.slots
    }

    pub fn labels(&self) -> impl Iterator<Item = &LabelPaint> {
        self.slots.iter().map(|slot| &slot.label)
    }

    /// Item backgrounds, left to right. The strip background is the clear
    /// color, not a quad.
    pub fn quads(&self) -> Vec<QuadInstance> {
        let color = self.theme.item_background.to_f32_array();
        self.slots
            .iter()
            .map(|slot| QuadInstance {
                rect: [
                    slot.rect.x as f32,
                    slot.rect.y as f32,
                    slot.rect.width as f32,
                    slot.rect.height as f32,
                ],
                color,
            })
            .collect()
    }
}
