//! Size corrections for a window without a native frame.
//!
//! Removing the caption changes how the window manager derives the
//! maximized rectangle and the client rectangle; these functions compute
//! the corrected values from plain rectangles.

use crate::rect::Rect;

/// The rectangle a maximized window should occupy: the work area of the
/// monitor hosting it, or the window manager's proposal when the window
/// is not associated with a monitor yet.
pub fn maximized_rect(proposed: Rect, work_area: Option<Rect>) -> Rect {
    work_area.unwrap_or(proposed)
}

/// Client rectangle for a maximized window. The window covers the whole
/// work area, so no border inset applies.
pub fn maximized_client_rect(proposed: Rect, work_area: Option<Rect>) -> Rect {
    work_area.unwrap_or(proposed)
}

/// Client rectangle for a restored window.
///
/// `proposed` is the rectangle before default processing and `computed`
/// the result of it. The default keeps the borderless left, right and
/// bottom; the top is placed one pixel below the proposed top so the
/// one-pixel DWM frame margin stays visible above the content.
pub fn restored_client_rect(proposed: Rect, computed: Rect) -> Rect {
    Rect::from_edges(
        computed.left(),
        proposed.top() + 1,
        computed.right(),
        computed.bottom(),
    )
}
