/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `modern-window init` to create a starter config file.
pub fn generate_config() -> String {
    r##"# Modern Window configuration
# Location: ~/.config/modern-window/config.toml

[window]
# Text shown in the taskbar and Alt+Tab.
title = "ModernWindow DEMO"

# Sizes are in pixels at 100% scaling and follow the window DPI.
[title_bar]
# Height of the drag-move area (acts like a native caption).
drag_height = 50
# Width and height of the area that shows the snap layouts flyout.
snap_width = 100
snap_height = 50

[resize_border]
# Hit-test strategy for the invisible resize border:
# "auto": pick from the Windows version.
# "corner-fix": ask Windows first, then correct the top corners.
# "direct": classify edges and corners without asking Windows.
policy = "auto"
# Fallback border thickness when system metrics are not used.
width = 8
height = 8
# Derive the thickness from the system frame metrics.
use_system_metrics = true

[paint]
font = "Times New Roman"
font_size = 16
# Outline color of the two title-bar zones.
border_color = "#bcbcbc"
drag_label = "Drag move"
snap_label = "Snap layouts"

[logging]
# Enable file logging to ~/.config/modern-window/logs/modern-window.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
