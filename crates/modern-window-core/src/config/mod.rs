mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::hit_test::ResizePolicy;
use crate::log::LogConfig;
use crate::version::WindowsVersion;

pub use loader::{config_dir, config_path, load, try_load};

/// Top-level configuration for Modern Window.
///
/// Loaded from `~/.config/modern-window/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Native window settings.
    pub window: WindowConfig,
    /// Hot-zone sizes for the custom title bar.
    pub title_bar: TitleBarConfig,
    /// Resize border thickness and hit-test policy.
    pub resize_border: ResizeBorderConfig,
    /// Chrome painting settings.
    pub paint: PaintConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Text shown in the taskbar and Alt+Tab.
    pub title: String,
}

/// Title-bar hot-zone sizes, in 96-DPI pixels.
///
/// Scaled by the window DPI each time the zones are recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleBarConfig {
    /// Height of the drag-move area.
    pub drag_height: i32,
    /// Width of the snap-layouts (synthetic maximize button) area.
    pub snap_width: i32,
    /// Height of the snap-layouts area.
    pub snap_height: i32,
}

/// Which hit-test strategy to use for the invisible resize border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyChoice {
    /// Pick from the detected Windows version.
    #[default]
    Auto,
    CornerFix,
    Direct,
}

impl PolicyChoice {
    /// Resolves the configured choice to a concrete policy.
    pub fn resolve(self, version: WindowsVersion) -> ResizePolicy {
        match self {
            Self::Auto => version.preferred_policy(),
            Self::CornerFix => ResizePolicy::CornerFix,
            Self::Direct => ResizePolicy::Direct,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeBorderConfig {
    pub policy: PolicyChoice,
    /// Fallback border width in 96-DPI pixels.
    pub width: i32,
    /// Fallback border height in 96-DPI pixels.
    pub height: i32,
    /// Derive the border from the system frame metrics instead of
    /// `width`/`height` when the platform can report them.
    pub use_system_metrics: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Font face for the zone labels.
    pub font: String,
    /// Font height in 96-DPI pixels.
    pub font_size: i32,
    /// Hex color of the zone outlines (e.g. "#bcbcbc").
    pub border_color: String,
    /// Label drawn in the drag-move area. Empty draws nothing.
    pub drag_label: String,
    /// Label drawn in the snap-layouts area. Empty draws nothing.
    pub snap_label: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ModernWindow DEMO".into(),
        }
    }
}

impl Default for TitleBarConfig {
    fn default() -> Self {
        Self {
            drag_height: 50,
            snap_width: 100,
            snap_height: 50,
        }
    }
}

impl Default for ResizeBorderConfig {
    fn default() -> Self {
        Self {
            policy: PolicyChoice::Auto,
            width: 8,
            height: 8,
            use_system_metrics: true,
        }
    }
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            font: "Times New Roman".into(),
            font_size: 16,
            border_color: "#bcbcbc".into(),
            drag_label: "Drag move".into(),
            snap_label: "Snap layouts".into(),
        }
    }
}

impl PaintConfig {
    /// Returns the parsed outline color, or the default gray when the
    /// configured string is not a valid hex color.
    pub fn border_color(&self) -> Color {
        Color::from_hex(&self.border_color).unwrap_or(Color::BORDER_GRAY)
    }
}

impl Config {
    /// Clamps sizes to safe ranges and repairs invalid values.
    pub fn validate(&mut self) {
        self.title_bar.drag_height = self.title_bar.drag_height.clamp(1, 400);
        self.title_bar.snap_width = self.title_bar.snap_width.clamp(1, 400);
        self.title_bar.snap_height = self.title_bar.snap_height.clamp(1, 400);
        self.resize_border.width = self.resize_border.width.clamp(1, 64);
        self.resize_border.height = self.resize_border.height.clamp(1, 64);
        self.paint.font_size = self.paint.font_size.clamp(6, 96);
        if Color::from_hex(&self.paint.border_color).is_none() {
            self.paint.border_color = PaintConfig::default().border_color;
        }
        if self.paint.font.trim().is_empty() {
            self.paint.font = PaintConfig::default().font;
        }
        self.logging.max_file_mb = self.logging.max_file_mb.max(1);
    }
}

#[cfg(test)]
mod tests;
