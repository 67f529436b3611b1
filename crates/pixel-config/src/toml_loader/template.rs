//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Pixel Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[chat]
# model = "grok-4-fast"
# temperature = 0.6            # 0.0-2.0
# base_url = ""                # empty = GROK_BASE_URL
# api_key = ""                 # empty = GROK_AUTH_TOKEN (never written back)
# endpoint = "/v1/chat/completions"
# max_tokens = 0               # 0 = let the server decide
# timeout_secs = 30            # 1-600
# max_retries = 2              # 0-10
# remote_enabled = true        # false = always use the offline responder

[overlay]
# enabled = true
# asset_dir = ""               # empty = ./assets
# speed_px = 3                 # 1-50
# tick_ms = 30                 # 10-1000
# bubble_hide_ms = 3000        # 500-60000
# bottom_margin = 80
# bubble_height = 120
# min_width = 240
# drag_threshold_px = 4

[window]
# enabled = true
# title = "Pixel the Desktop Pet"
# width = 360                  # 240-2000
# height = 480                 # 200-2000
# always_on_top = true

[logging]
# level = "info"               # trace, debug, info, warn, error
"##
    .to_string()
}
