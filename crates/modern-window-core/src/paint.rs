//! Painting sequence for the custom title bar.
//!
//! The drawing primitives are supplied by a [`Surface`]; this module owns
//! the order of operations and the pairing of every create/select with
//! its restore/delete, so no paint leaks a GDI object.

use crate::chrome::{HotZones, scale};
use crate::color::Color;
use crate::config::PaintConfig;
use crate::rect::Rect;

/// An immediate-mode drawing surface valid for one paint invocation.
pub trait Surface {
    /// Handle of a drawing object (pen or font) owned by the surface.
    type Object: Copy;

    /// Fills `rect` with the window background brush.
    fn fill_background(&mut self, rect: Rect);

    /// Creates a one-pixel solid pen. `None` if the OS refused.
    fn create_pen(&mut self, color: Color) -> Option<Self::Object>;

    /// Creates a font of the given face and pixel height.
    fn create_font(&mut self, face: &str, height: i32) -> Option<Self::Object>;

    /// Selects `object` and returns the object it replaced.
    fn select(&mut self, object: Self::Object) -> Self::Object;

    /// Releases an object created by this surface.
    fn delete(&mut self, object: Self::Object);

    /// Outlines `rect` with the selected pen.
    fn outline(&mut self, rect: Rect);

    /// Draws one line of text centered in `rect` with the selected font.
    fn draw_centered_text(&mut self, text: &str, rect: Rect);
}

/// Resolved paint settings for one DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeStyle {
    pub font: String,
    pub font_height: i32,
    pub border_color: Color,
    pub drag_label: String,
    pub snap_label: String,
}

impl ChromeStyle {
    pub fn from_config(config: &PaintConfig, dpi: u32) -> Self {
        Self {
            font: config.font.clone(),
            font_height: scale(config.font_size, dpi),
            border_color: config.border_color(),
            drag_label: config.drag_label.clone(),
            snap_label: config.snap_label.clone(),
        }
    }
}

impl Default for ChromeStyle {
    fn default() -> Self {
        Self::from_config(&PaintConfig::default(), crate::chrome::BASE_DPI)
    }
}

/// Paints the title-bar background, zone outlines and labels.
///
/// Pen and font are restored and deleted before returning, including
/// when one of them could not be created or a label is empty.
pub fn paint_chrome<S: Surface>(surface: &mut S, zones: &HotZones, style: &ChromeStyle) {
    surface.fill_background(zones.title_area());

    let pen = surface.create_pen(style.border_color);
    let old_pen = pen.map(|p| surface.select(p));
    surface.outline(zones.drag_move);
    surface.outline(zones.snap_layouts);

    let font = surface.create_font(&style.font, style.font_height);
    let old_font = font.map(|f| surface.select(f));

    for (label, rect) in [
        (&style.drag_label, zones.drag_move),
        (&style.snap_label, zones.snap_layouts),
    ] {
        if label.is_empty() || rect.is_empty() {
            continue;
        }
        surface.draw_centered_text(label, rect);
    }

    if let Some(old) = old_font {
        surface.select(old);
    }
    if let Some(old) = old_pen {
        surface.select(old);
    }
    if let Some(font) = font {
        surface.delete(font);
    }
    if let Some(pen) = pen {
        surface.delete(pen);
    }
}

#[cfg(test)]
#[path = "paint_tests.rs"]
mod tests;
