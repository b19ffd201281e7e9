use modern_window_core::paint::paint_chrome;
use modern_window_core::{ChromeStyle, Color, HotZones, Rect, Surface};
use windows::Win32::Foundation::{COLORREF, HWND, POINT};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, COLOR_WINDOW, CreateFontW, CreatePen, DT_CENTER, DT_SINGLELINE, DT_VCENTER,
    DeleteObject, DrawTextW, EndPaint, FONT_CHARSET, FONT_CLIP_PRECISION, FONT_OUTPUT_PRECISION,
    FONT_QUALITY, FillRect, GetSysColorBrush, HDC, HGDIOBJ, PAINTSTRUCT, PS_SOLID, Polyline,
    SelectObject, SetBkMode, TRANSPARENT,
};
use windows::core::PCWSTR;

use crate::{rect_to_win, wide};

/// Paints the custom title bar for one `WM_PAINT`.
pub(crate) fn paint_window(hwnd: HWND, zones: &HotZones, style: &ChromeStyle) {
    let guard = PaintGuard::begin(hwnd);
    if guard.hdc.is_invalid() {
        return;
    }
    let mut surface = GdiSurface::new(guard.hdc);
    paint_chrome(&mut surface, zones, style);
}

/// Pairs `BeginPaint` with `EndPaint`, which must run even on early exit.
struct PaintGuard {
    hwnd: HWND,
    ps: PAINTSTRUCT,
    hdc: HDC,
}

impl PaintGuard {
    fn begin(hwnd: HWND) -> Self {
        let mut ps = PAINTSTRUCT::default();
        // SAFETY: called while handling WM_PAINT for hwnd.
        let hdc = unsafe { BeginPaint(hwnd, &mut ps) };
        Self { hwnd, ps, hdc }
    }
}

impl Drop for PaintGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = EndPaint(self.hwnd, &self.ps);
        }
    }
}

/// [`Surface`] over a paint DC.
struct GdiSurface {
    hdc: HDC,
}

impl GdiSurface {
    fn new(hdc: HDC) -> Self {
        unsafe {
            SetBkMode(hdc, TRANSPARENT);
        }
        Self { hdc }
    }
}

impl Surface for GdiSurface {
    type Object = HGDIOBJ;

    fn fill_background(&mut self, rect: Rect) {
        let rc = rect_to_win(rect);
        unsafe {
            FillRect(self.hdc, &rc, GetSysColorBrush(COLOR_WINDOW));
        }
    }

    fn create_pen(&mut self, color: Color) -> Option<HGDIOBJ> {
        let pen = unsafe { CreatePen(PS_SOLID, 1, COLORREF(color.to_bgr())) };
        (!pen.is_invalid()).then(|| pen.into())
    }

    fn create_font(&mut self, face: &str, height: i32) -> Option<HGDIOBJ> {
        let face = wide(face);
        let font = unsafe {
            CreateFontW(
                height,
                0,
                0,
                0,
                400,
                0,
                0,
                0,
                FONT_CHARSET(0),
                FONT_OUTPUT_PRECISION(0),
                FONT_CLIP_PRECISION(0),
                FONT_QUALITY(0),
                0,
                PCWSTR(face.as_ptr()),
            )
        };
        (!font.is_invalid()).then(|| font.into())
    }

    fn select(&mut self, object: HGDIOBJ) -> HGDIOBJ {
        unsafe { SelectObject(self.hdc, object) }
    }

    fn delete(&mut self, object: HGDIOBJ) {
        unsafe {
            let _ = DeleteObject(object);
        }
    }

    fn outline(&mut self, rect: Rect) {
        // Like FrameRect: the right and bottom lines sit inside the rect.
        let (left, top) = (rect.left(), rect.top());
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        let points = [
            POINT { x: left, y: top },
            POINT { x: right, y: top },
            POINT { x: right, y: bottom },
            POINT { x: left, y: bottom },
            POINT { x: left, y: top },
        ];
        unsafe {
            let _ = Polyline(self.hdc, &points);
        }
    }

    fn draw_centered_text(&mut self, text: &str, rect: Rect) {
        let mut buffer: Vec<u16> = text.encode_utf16().collect();
        let mut rc = rect_to_win(rect);
        unsafe {
            DrawTextW(
                self.hdc,
                &mut buffer,
                &mut rc,
                DT_CENTER | DT_VCENTER | DT_SINGLELINE,
            );
        }
    }
}
