//! Validation for strip geometry and colors.

use crate::schema::TaskstripConfig;

use super::helpers::{validate_color, validate_range};

pub(crate) fn validate_panel(errors: &mut Vec<String>, config: &TaskstripConfig) {
    let panel = &config.panel;
    validate_range(errors, "panel.height", panel.height, 16, 200);
    validate_range(errors, "panel.spacing", panel.spacing, 0, 32);
    validate_range(errors, "panel.item_min_width", panel.item_min_width, 16, 1000);
    validate_range(errors, "panel.item_max_width", panel.item_max_width, 16, 1000);
    validate_range(errors, "panel.font_size", panel.font_size, 8, 48);
    validate_color(errors, "panel.background", &panel.background);
    validate_color(errors, "panel.item_background", &panel.item_background);
    validate_color(errors, "panel.text_color", &panel.text_color);

    if panel.item_min_width > panel.item_max_width {
        errors.push(format!(
            "panel.item_min_width ({}) exceeds panel.item_max_width ({})",
            panel.item_min_width, panel.item_max_width
        ));
    }
}
