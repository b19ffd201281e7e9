//! Title-bar hot zones and the per-window chrome state.
//!
//! The zones are recomputed from the client width on every position
//! change and read by hit-testing and painting. State lives in `Cell`s
//! because the window procedure re-enters itself (default processing
//! and synthetic clicks send nested messages) and must never hold a
//! borrow across an OS call.

use std::cell::Cell;

use crate::config::{ResizeBorderConfig, TitleBarConfig};
use crate::hit_test::{HitTest, HitZone, ResizePolicy};
use crate::rect::{Point, Rect};

/// DPI at which configured pixel sizes are taken literally.
pub const BASE_DPI: u32 = 96;

/// Scales a 96-DPI pixel value to `dpi`. A zero DPI (query failed) is
/// treated as the base DPI.
pub fn scale(value: i32, dpi: u32) -> i32 {
    let dpi = if dpi == 0 { BASE_DPI } else { dpi };
    (i64::from(value) * i64::from(dpi) / i64::from(BASE_DPI)) as i32
}

/// Thickness of the invisible resize border, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeBorder {
    pub width: i32,
    pub height: i32,
}

impl ResizeBorder {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The configured fallback thickness at the given DPI.
    pub fn scaled(config: &ResizeBorderConfig, dpi: u32) -> Self {
        Self::new(scale(config.width, dpi), scale(config.height, dpi))
    }
}

impl Default for ResizeBorder {
    fn default() -> Self {
        Self::new(8, 8)
    }
}

/// Hot-zone sizes in physical pixels for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeMetrics {
    pub drag_height: i32,
    pub snap_width: i32,
    pub snap_height: i32,
}

impl ChromeMetrics {
    pub fn scaled(config: &TitleBarConfig, dpi: u32) -> Self {
        Self {
            drag_height: scale(config.drag_height, dpi),
            snap_width: scale(config.snap_width, dpi),
            snap_height: scale(config.snap_height, dpi),
        }
    }
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self::scaled(&TitleBarConfig::default(), BASE_DPI)
    }
}

/// The two title-bar rectangles, in client coordinates.
///
/// `Default` is two empty rectangles, so nothing is classified as a
/// zone before the first layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotZones {
    /// Acts as the caption: drag to move, double-click to maximize.
    pub drag_move: Rect,
    /// Reported as the maximize button so the shell shows snap layouts.
    pub snap_layouts: Rect,
}

impl HotZones {
    /// Lays the zones out along the top of a client area `client_width`
    /// pixels wide: the snap area hugs the right edge and the drag area
    /// fills the rest. The drag area collapses to empty (never negative)
    /// when the window is narrower than the snap area.
    pub fn layout(client_width: i32, metrics: &ChromeMetrics) -> Self {
        let drag_right = (client_width - metrics.snap_width).max(0);
        Self {
            drag_move: Rect::from_edges(0, 0, drag_right, metrics.drag_height),
            snap_layouts: Rect::from_edges(
                drag_right,
                0,
                drag_right + metrics.snap_width,
                metrics.snap_height,
            ),
        }
    }

    /// The area painted as the custom title bar.
    pub fn title_area(&self) -> Rect {
        Rect::from_edges(0, 0, self.snap_layouts.right(), self.snap_layouts.bottom())
    }
}

/// Chrome state owned by one window for its whole lifetime.
#[derive(Debug)]
pub struct ChromeState {
    zones: Cell<HotZones>,
    border: Cell<ResizeBorder>,
    policy: ResizePolicy,
}

impl ChromeState {
    pub fn new(policy: ResizePolicy) -> Self {
        Self {
            zones: Cell::new(HotZones::default()),
            border: Cell::new(ResizeBorder::default()),
            policy,
        }
    }

    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    pub fn zones(&self) -> HotZones {
        self.zones.get()
    }

    pub fn border(&self) -> ResizeBorder {
        self.border.get()
    }

    /// Recomputes both zones and the border together.
    pub fn relayout(&self, client_width: i32, metrics: &ChromeMetrics, border: ResizeBorder) {
        self.zones.set(HotZones::layout(client_width, metrics));
        self.border.set(border);
    }

    /// Classifies a client-coordinate point with the current zones.
    ///
    /// `os_default` is only invoked under [`ResizePolicy::CornerFix`].
    pub fn hit_test(
        &self,
        point: Point,
        client: Rect,
        maximized: bool,
        os_default: impl FnOnce() -> HitZone,
    ) -> HitZone {
        let zones = self.zones.get();
        HitTest {
            zones: &zones,
            client,
            border: self.border.get(),
            maximized,
        }
        .classify(point, self.policy, os_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_are_adjacent_and_anchored_to_width() {
        // Arrange
        let metrics = ChromeMetrics::default();

        for width in [150, 151, 400, 800, 1920, 3840] {
            // Act
            let zones = HotZones::layout(width, &metrics);

            // Assert
            assert_eq!(zones.drag_move.left(), 0);
            assert_eq!(zones.drag_move.top(), 0);
            assert_eq!(zones.drag_move.bottom(), 50);
            assert_eq!(zones.drag_move.right(), width - 100);
            assert_eq!(zones.snap_layouts.left(), zones.drag_move.right());
            assert_eq!(zones.snap_layouts.right(), zones.drag_move.right() + 100);
            assert_eq!(zones.snap_layouts.bottom(), 50);
        }
    }

    #[test]
    fn narrow_window_collapses_drag_area() {
        // Act
        let zones = HotZones::layout(60, &ChromeMetrics::default());

        // Assert
        assert!(zones.drag_move.is_empty());
        assert_eq!(zones.snap_layouts.left(), 0);
        assert_eq!(zones.snap_layouts.width, 100);
    }

    #[test]
    fn title_area_spans_both_zones() {
        let zones = HotZones::layout(800, &ChromeMetrics::default());
        assert_eq!(zones.title_area(), Rect::new(0, 0, 800, 50));
    }

    #[test]
    fn metrics_scale_with_dpi() {
        // Act
        let metrics = ChromeMetrics::scaled(&TitleBarConfig::default(), 144);

        // Assert
        assert_eq!(metrics.drag_height, 75);
        assert_eq!(metrics.snap_width, 150);
        assert_eq!(metrics.snap_height, 75);
    }

    #[test]
    fn zero_dpi_is_treated_as_base() {
        assert_eq!(scale(100, 0), 100);
        assert_eq!(scale(8, 192), 16);
    }

    #[test]
    fn border_scales_with_dpi() {
        let border = ResizeBorder::scaled(&ResizeBorderConfig::default(), 120);
        assert_eq!(border, ResizeBorder::new(10, 10));
    }

    #[test]
    fn state_starts_with_empty_zones() {
        // Arrange
        let state = ChromeState::new(ResizePolicy::Direct);

        // Act
        let hit = state.hit_test(Point::new(300, 20), Rect::new(0, 0, 800, 600), false, || {
            HitZone::Client
        });

        // Assert
        assert_eq!(state.zones(), HotZones::default());
        assert_eq!(hit, HitZone::Client);
    }

    #[test]
    fn relayout_replaces_zones() {
        // Arrange
        let state = ChromeState::new(ResizePolicy::Direct);

        // Act
        state.relayout(800, &ChromeMetrics::default(), ResizeBorder::new(6, 6));
        let first = state.zones();
        state.relayout(1000, &ChromeMetrics::default(), ResizeBorder::new(6, 6));

        // Assert
        assert_eq!(first.drag_move.right(), 700);
        assert_eq!(state.zones().drag_move.right(), 900);
        assert_eq!(state.border(), ResizeBorder::new(6, 6));
    }
}
