//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# multinav configuration
# Only override what you want to change -- missing fields use defaults.
# Read once at startup; changes made in the control panel are not saved here.

[window]
# title = "multinav"
# width = 1680
# height = 1000
# min_width = 1200
# min_height = 800
# background = "#111318"

[layout]
# control_width = 380    # 200-800
# pane_count = 4         # 3 or 4

[panes]
# initial_urls = [
#   "https://example.com",
#   "https://example.org",
#   "https://example.net",
#   "https://www.wikipedia.org",
# ]
# background_css = "#1b1d23"
# zoom = 1.0             # 0.25-3.0

[input]
# mode = "control"       # control, mirror, none
# spray_all = true

[mirror]
# enabled = false
# source = 0             # 0-3
# highlight_color = "#2a60e8"

[ingest]
# enabled = true
# url = "http://127.0.0.1:8787/log"
# timeout_ms = 5000      # 100-60000

[logging]
# level = "info"         # debug, info, warn, error

[advanced]
# devtools = false       # MULTINAV_DEBUG=1 also enables devtools
"##
}
