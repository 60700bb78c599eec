//! Panel strip geometry and colors.

use serde::{Deserialize, Serialize};

/// Size and spacing of the taskbar strip.
///
/// The strip spans the primary monitor width; items share it evenly within
/// the configured width bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Strip height in pixels (valid range: 16-200).
    pub height: u32,
    /// Gap between items in pixels (valid range: 0-32).
    pub spacing: u32,
    /// Narrowest an item may get, in pixels (valid range: 16-1000).
    pub item_min_width: u32,
    /// Widest an item may get, in pixels (valid range: 16-1000).
    pub item_max_width: u32,
    /// Label font size in pixels (valid range: 8-48).
    pub font_size: u32,
    /// Strip background, `#rrggbb` or `#rrggbbaa`.
    pub background: String,
    pub item_background: String,
    pub text_color: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            height: 50,
            spacing: 2,
            item_min_width: 100,
            item_max_width: 200,
            font_size: 13,
            background: "#1e1e2e".into(),
            item_background: "#313244".into(),
            text_color: "#cdd6f4".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_config_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.height, 50);
        assert_eq!(config.spacing, 2);
        assert_eq!(config.item_min_width, 100);
        assert_eq!(config.item_max_width, 200);
        assert_eq!(config.font_size, 13);
        assert_eq!(config.text_color, "#cdd6f4");
    }

    #[test]
    fn panel_config_partial_toml() {
        let toml_str = r#"
height = 32
item_max_width = 320
"#;
        let config: PanelConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.height, 32);
        assert_eq!(config.item_max_width, 320);
        // Defaults preserved
        assert_eq!(config.spacing, 2);
        assert_eq!(config.item_min_width, 100);
    }
}
