//! Win32 implementation of the Modern Window custom chrome.
//!
//! Everything here is a thin layer over `modern-window-core`: messages
//! are decoded into typed variants, answered with the core's layout and
//! hit-test logic, and drawn through a GDI [`Surface`] implementation.
//!
//! [`Surface`]: modern_window_core::Surface

#![cfg(windows)]

/// Windows build-number detection (registry, read once).
pub mod build_number;

/// Display scale and resize-border metrics.
pub mod dpi;

/// The thread's message pump.
pub mod event_loop;

/// Native frame removal and DWM shadow.
mod frame;

/// Typed window messages and hit-test codes.
mod message;

/// Monitor work-area queries.
pub mod monitor;

/// GDI drawing surface and paint entry point.
mod paint;

/// The frameless window and its window procedure.
pub mod window;

pub use window::ModernWindow;

use modern_window_core::Rect;
use windows::Win32::Foundation::RECT;

/// Encodes a string as a NUL-terminated UTF-16 buffer.
pub(crate) fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

pub(crate) fn rect_from_win(rc: RECT) -> Rect {
    Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom)
}

pub(crate) fn rect_to_win(rect: Rect) -> RECT {
    RECT {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}
