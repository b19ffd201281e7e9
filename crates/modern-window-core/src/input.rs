//! Mouse input over the synthetic maximize button.
//!
//! The snap-layouts zone is reported as the maximize button so the shell
//! shows its flyout on hover, but a click there must not maximize. The
//! non-client click is swallowed and replayed as an ordinary client click.

use crate::hit_test::HitZone;
use crate::rect::Point;

/// Left mouse button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
}

/// A client-area left-button event to send in place of a non-client one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticClick {
    pub action: ButtonAction,
    /// Client coordinates.
    pub at: Point,
}

/// Returns the client click replacing a non-client left-button event,
/// or `None` when the event should reach default handling.
pub fn translate_nc_click(
    action: ButtonAction,
    hit: HitZone,
    client_point: Point,
) -> Option<SyntheticClick> {
    (hit == HitZone::MaxButton).then_some(SyntheticClick {
        action,
        at: client_point,
    })
}

/// Unpacks signed 16-bit x/y coordinates from a mouse-message `LPARAM`.
pub fn unpack_point(lparam: isize) -> Point {
    let raw = lparam as usize;
    let x = (raw & 0xFFFF) as u16 as i16;
    let y = ((raw >> 16) & 0xFFFF) as u16 as i16;
    Point::new(i32::from(x), i32::from(y))
}

/// Packs client coordinates into a mouse-message `LPARAM`.
pub fn pack_point(point: Point) -> isize {
    let low = u32::from(point.x as u16);
    let high = u32::from(point.y as u16);
    ((high << 16) | low) as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_button_press_and_release_become_one_client_click_each() {
        // Arrange
        let at = Point::new(742, 17);
        let events = [ButtonAction::Press, ButtonAction::Release];

        // Act
        let clicks: Vec<SyntheticClick> = events
            .iter()
            .filter_map(|&action| translate_nc_click(action, HitZone::MaxButton, at))
            .collect();

        // Assert
        assert_eq!(
            clicks,
            vec![
                SyntheticClick {
                    action: ButtonAction::Press,
                    at
                },
                SyntheticClick {
                    action: ButtonAction::Release,
                    at
                },
            ]
        );
    }

    #[test]
    fn other_zones_fall_through() {
        for hit in [
            HitZone::Caption,
            HitZone::Client,
            HitZone::TopLeft,
            HitZone::Other(20),
        ] {
            assert_eq!(
                translate_nc_click(ButtonAction::Press, hit, Point::new(1, 1)),
                None
            );
        }
    }

    #[test]
    fn unpack_sign_extends_coordinates() {
        // Arrange
        let lparam = pack_point(Point::new(-8, -1));

        // Act / Assert
        assert_eq!(unpack_point(lparam), Point::new(-8, -1));
    }

    #[test]
    fn pack_places_y_in_high_word() {
        assert_eq!(pack_point(Point::new(0x12, 0x34)), 0x0034_0012);
        assert_eq!(unpack_point(0x0034_0012), Point::new(0x12, 0x34));
    }

    #[test]
    fn multi_monitor_screen_coordinates_survive() {
        let point = Point::new(3000, -200);
        assert_eq!(unpack_point(pack_point(point)), point);
    }
}
