use modern_window_core::{WindowResult, log_warn};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::DwmExtendFrameIntoClientArea;
use windows::Win32::UI::Controls::MARGINS;
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_STYLE, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER,
    SetWindowLongPtrW, SetWindowPos, WS_MAXIMIZEBOX, WS_MINIMIZEBOX, WS_POPUP, WS_THICKFRAME,
};

/// Window style once the native caption is gone.
///
/// `WS_THICKFRAME` keeps edge resizing and Aero Snap; the boxes keep
/// maximize and taskbar minimize.
const FRAMELESS_STYLE: u32 = WS_POPUP.0 | WS_THICKFRAME.0 | WS_MAXIMIZEBOX.0 | WS_MINIMIZEBOX.0;

/// Strips the native caption and borders and asks the system to
/// recompute the frame.
///
/// The DWM shadow is best effort: with composition off the window still
/// works, just without a shadow.
pub(crate) fn strip_native_frame(hwnd: HWND) -> WindowResult<()> {
    // SAFETY: hwnd was created by this thread and is still alive.
    unsafe {
        SetWindowLongPtrW(hwnd, GWL_STYLE, FRAMELESS_STYLE as isize);
    }

    if let Err(e) = extend_shadow(hwnd) {
        log_warn!("DWM frame extension failed for 0x{:X}: {e}", hwnd.0 as usize);
    }

    // SAFETY: same handle; SWP_FRAMECHANGED triggers WM_NCCALCSIZE so the
    // new style takes effect immediately.
    unsafe {
        SetWindowPos(
            hwnd,
            None,
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE | SWP_NOZORDER | SWP_FRAMECHANGED,
        )?;
    }
    Ok(())
}

/// Extends the DWM frame one pixel into the client top edge, which is
/// enough for the compositor to keep drawing the drop shadow.
fn extend_shadow(hwnd: HWND) -> WindowResult<()> {
    let margins = MARGINS {
        cxLeftWidth: 0,
        cxRightWidth: 0,
        cyTopHeight: 1,
        cyBottomHeight: 0,
    };
    // SAFETY: margins outlives the call.
    unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins)? };
    Ok(())
}
