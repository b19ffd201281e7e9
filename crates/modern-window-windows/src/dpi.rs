use modern_window_core::chrome::BASE_DPI;
use modern_window_core::config::ResizeBorderConfig;
use modern_window_core::ResizeBorder;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{GetDC, GetDeviceCaps, LOGPIXELSX, ReleaseDC};
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_CXFRAME, SM_CXPADDEDBORDER, SM_CYFRAME,
};

/// Returns the horizontal DPI of the window's display context.
///
/// The process does not opt into DPI awareness, so this is whatever scale
/// the system applies on its own. Falls back to 96 if the query fails.
pub fn window_dpi(hwnd: HWND) -> u32 {
    // SAFETY: the DC is released before returning.
    let dpi = unsafe {
        let hdc = GetDC(Some(hwnd));
        if hdc.is_invalid() {
            return BASE_DPI;
        }
        let dpi = GetDeviceCaps(Some(hdc), LOGPIXELSX);
        ReleaseDC(Some(hwnd), hdc);
        dpi
    };
    u32::try_from(dpi).ok().filter(|&d| d > 0).unwrap_or(BASE_DPI)
}

/// Resize-border thickness for a window at `dpi`.
///
/// With `use_system_metrics` the sizing frame plus padded border of the
/// current system metrics is used. Those are already in device pixels.
/// Otherwise, or if the system reports nothing usable, the configured
/// size is scaled.
pub fn resize_border(config: &ResizeBorderConfig, dpi: u32) -> ResizeBorder {
    if config.use_system_metrics {
        // SAFETY: GetSystemMetrics has no preconditions.
        let (cx, cy) = unsafe {
            let padded = GetSystemMetrics(SM_CXPADDEDBORDER);
            (
                GetSystemMetrics(SM_CXFRAME) + padded,
                GetSystemMetrics(SM_CYFRAME) + padded,
            )
        };
        if cx > 0 && cy > 0 {
            return ResizeBorder::new(cx, cy);
        }
    }
    ResizeBorder::scaled(config, dpi)
}
