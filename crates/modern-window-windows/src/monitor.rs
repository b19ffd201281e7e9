use std::mem;

use modern_window_core::{Rect, WindowResult};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTONULL, MONITOR_DEFAULTTOPRIMARY, MONITORINFO,
    MonitorFromWindow,
};

use crate::rect_from_win;

/// Returns the work area of the primary monitor.
///
/// The work area excludes the taskbar and any docked toolbars.
pub fn primary_work_area() -> WindowResult<Rect> {
    // A null HWND with MONITOR_DEFAULTTOPRIMARY yields the primary monitor.
    let monitor = unsafe { MonitorFromWindow(HWND::default(), MONITOR_DEFAULTTOPRIMARY) };
    work_area_for_monitor(monitor)
}

/// Returns the work area of the monitor the window is on.
///
/// `None` when the window intersects no monitor or the query fails;
/// callers then keep the geometry the system proposed.
pub fn work_area_for_window(hwnd: HWND) -> Option<Rect> {
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONULL) };
    if monitor.is_invalid() {
        return None;
    }
    work_area_for_monitor(monitor).ok()
}

fn work_area_for_monitor(monitor: HMONITOR) -> WindowResult<Rect> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: cbSize is set as the API requires.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };

    if !success.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    Ok(rect_from_win(info.rcWork))
}
