//! Commented default config written on first run.

pub(super) fn default_config_toml() -> &'static str {
    r##"# taskstrip configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[poll]
# interval_ms = 1000          # 100-60000
# identity = "handle_and_name" # handle_and_name, handle
#   handle_and_name: a retitled window gets a fresh entry in the same slot
#   handle: labels keep the title seen when the entry was created

[panel]
# height = 50                 # 16-200
# spacing = 2                 # 0-32
# item_min_width = 100        # 16-1000
# item_max_width = 200        # 16-1000, >= item_min_width
# font_size = 13              # 8-48
# background = "#1e1e2e"      # #rrggbb or #rrggbbaa
# item_background = "#313244"
# text_color = "#cdd6f4"

[gateway]
# display = ":0"              # defaults to $DISPLAY
# activate_on_all_desktops = true

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
}
